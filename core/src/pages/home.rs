//! Home page: site heading, category sidebar and the link to the catalog.

use super::{AriaRole, BasePage, Browser, Locator, PageError};

pub const DEFAULT_TITLE: &str = "Automation Exercise";

/// The landing page.
#[derive(Debug)]
pub struct HomePage<B> {
    page: BasePage<B>,
    pub heading: Locator,
    pub category_heading: Locator,
    pub products_link: Locator,
}

impl<B: Browser> HomePage<B> {
    pub fn new(browser: B, base_url: &str) -> Self {
        Self {
            page: BasePage::new(browser, base_url),
            heading: Locator::role(AriaRole::Heading, "AutomationExercise"),
            category_heading: Locator::role(AriaRole::Heading, "Category"),
            products_link: Locator::role(AriaRole::Link, "Products"),
        }
    }

    pub fn navigate(&mut self) -> Result<(), PageError> {
        self.page.goto("/")
    }

    /// Both the site heading and the category sidebar are showing.
    pub fn verify_page_loaded(&mut self) -> Result<(), PageError> {
        self.page.browser().wait_for_visible(&self.heading)?;
        self.page.browser().wait_for_visible(&self.category_heading)
    }

    pub fn go_to_products(&mut self) -> Result<(), PageError> {
        self.page.browser().click(&self.products_link)
    }

    pub fn verify_title(&mut self, expected: Option<&str>) -> Result<bool, PageError> {
        let title = self.page.title()?;
        Ok(title == expected.unwrap_or(DEFAULT_TITLE))
    }
}
