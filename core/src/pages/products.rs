//! Products page: the search box and the result cards it fills in.

use super::{BasePage, Browser, Locator, PageError};

/// The product listing and search page.
#[derive(Debug)]
pub struct ProductsPage<B> {
    page: BasePage<B>,
    pub search_input: Locator,
    pub search_button: Locator,
    pub searched_products_title: Locator,
    pub product_info: Locator,
}

impl<B: Browser> ProductsPage<B> {
    pub fn new(browser: B, base_url: &str) -> Self {
        Self {
            page: BasePage::new(browser, base_url),
            search_input: Locator::css("#search_product"),
            search_button: Locator::css("button#submit_search"),
            searched_products_title: Locator::css(".features_items .title"),
            product_info: Locator::css(".single-products .productinfo > p"),
        }
    }

    pub fn navigate(&mut self) -> Result<(), PageError> {
        self.page.goto("/products")
    }

    pub fn search_product(&mut self, product_name: &str) -> Result<(), PageError> {
        let browser = self.page.browser();
        browser.click(&self.search_input)?;
        browser.fill(&self.search_input, product_name)?;
        browser.click(&self.search_button)
    }

    pub fn verify_searched_products_title(&mut self) -> Result<(), PageError> {
        self.page.browser().wait_for_visible(&self.searched_products_title)
    }

    /// Heading text above the results; empty when absent.
    pub fn searched_products_title(&mut self) -> Result<String, PageError> {
        Ok(self
            .page
            .browser()
            .text_content(&self.searched_products_title)?
            .unwrap_or_default())
    }

    /// At least one result card is showing.
    pub fn verify_product_exists(&mut self) -> Result<(), PageError> {
        self.page.browser().wait_for_visible(&self.product_info)
    }

    /// Name on the first result card; empty when absent.
    pub fn product_info_text(&mut self) -> Result<String, PageError> {
        Ok(self
            .page
            .browser()
            .text_content(&self.product_info)?
            .unwrap_or_default())
    }
}
