//! `Browser` backed by Playwright.
//!
//! Playwright's API is async; this type owns a tokio runtime and blocks on it
//! for every call so page objects stay synchronous like the API clients.

use playwright_rs::{expect, Browser as PwBrowser, Page, Playwright};
use tokio::runtime::Runtime;
use tracing::debug;

use super::{Browser, Locator, PageError};

/// One headless Chromium page.
pub struct PlaywrightBrowser {
    runtime: Runtime,
    // Keeps the driver connection alive for as long as the page is used.
    _playwright: Playwright,
    browser: PwBrowser,
    page: Page,
}

fn driver(e: playwright_rs::Error) -> PageError {
    PageError::Driver(e.to_string())
}

impl PlaywrightBrowser {
    /// Start the Playwright driver and open a blank page in headless Chromium.
    pub fn launch() -> Result<Self, PageError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| PageError::Driver(e.to_string()))?;
        let (playwright, browser, page) = runtime.block_on(async {
            let playwright = Playwright::launch().await.map_err(driver)?;
            let browser = playwright.chromium().launch().await.map_err(driver)?;
            let page = browser.new_page().await.map_err(driver)?;
            Ok::<_, PageError>((playwright, browser, page))
        })?;
        debug!("chromium launched");
        Ok(Self {
            runtime,
            _playwright: playwright,
            browser,
            page,
        })
    }

    pub fn close(self) -> Result<(), PageError> {
        self.runtime
            .block_on(self.browser.close())
            .map_err(driver)
    }
}

impl Browser for PlaywrightBrowser {
    fn goto(&mut self, url: &str) -> Result<(), PageError> {
        self.runtime
            .block_on(self.page.goto(url, None))
            .map(|_| ())
            .map_err(|e| PageError::Navigation {
                url: url.to_string(),
                reason: e.to_string(),
            })
    }

    fn title(&mut self) -> Result<String, PageError> {
        self.runtime.block_on(self.page.title()).map_err(driver)
    }

    // `goto` already waits for the load event; this only confirms a body rendered.
    fn wait_for_dom_content_loaded(&mut self) -> Result<(), PageError> {
        let body = Locator::css("body");
        self.wait_for_visible(&body)
    }

    fn click(&mut self, locator: &Locator) -> Result<(), PageError> {
        let page = &self.page;
        self.runtime.block_on(async {
            page.locator(&locator.selector())
                .await
                .click(None)
                .await
                .map_err(driver)
        })
    }

    fn fill(&mut self, locator: &Locator, text: &str) -> Result<(), PageError> {
        let page = &self.page;
        self.runtime.block_on(async {
            page.locator(&locator.selector())
                .await
                .fill(text, None)
                .await
                .map_err(driver)
        })
    }

    fn wait_for_visible(&mut self, locator: &Locator) -> Result<(), PageError> {
        let page = &self.page;
        self.runtime.block_on(async {
            let target = page.locator(&locator.selector()).await;
            expect(target)
                .to_be_visible()
                .await
                .map_err(|_| PageError::Timeout(locator.clone()))
        })
    }

    fn text_content(&mut self, locator: &Locator) -> Result<Option<String>, PageError> {
        let page = &self.page;
        self.runtime.block_on(async {
            page.locator(&locator.selector())
                .await
                .text_content()
                .await
                .map_err(driver)
        })
    }
}
