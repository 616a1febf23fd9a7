//! Page objects for the shop's web UI.
//!
//! # Design
//! No browser driver is linked here. Page objects talk to a `Browser`
//! implementation supplied by the caller and own only their locators and
//! the site's base URL. `Browser` is implemented for `&mut B`, so several
//! page objects can take turns driving one browser within a test.
//! With the `browser` feature, `PlaywrightBrowser` drives headless Chromium.

mod home;
#[cfg(feature = "browser")]
mod playwright;
mod products;

pub use home::HomePage;
#[cfg(feature = "browser")]
pub use playwright::PlaywrightBrowser;
pub use products::ProductsPage;

use tracing::debug;

/// ARIA roles the page objects query by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AriaRole {
    Heading,
    Link,
}

impl AriaRole {
    pub fn as_str(self) -> &'static str {
        match self {
            AriaRole::Heading => "heading",
            AriaRole::Link => "link",
        }
    }
}

/// How an element is found on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// Accessible role plus accessible name.
    Role { role: AriaRole, name: String },
    Css(String),
}

impl Locator {
    pub fn role(role: AriaRole, name: &str) -> Self {
        Locator::Role {
            role,
            name: name.to_string(),
        }
    }

    pub fn css(selector: &str) -> Self {
        Locator::Css(selector.to_string())
    }

    /// Playwright selector for the first matching element.
    pub fn selector(&self) -> String {
        match self {
            Locator::Role { role, name } => {
                format!("role={}[name={name:?}] >> nth=0", role.as_str())
            }
            Locator::Css(selector) => format!("{selector} >> nth=0"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("navigation to {url} failed: {reason}")]
    Navigation { url: String, reason: String },

    #[error("no element matches {0:?}")]
    ElementNotFound(Locator),

    #[error("timed out waiting for {0:?}")]
    Timeout(Locator),

    #[error("browser driver error: {0}")]
    Driver(String),
}

/// The browser capabilities the page objects rely on.
pub trait Browser {
    fn goto(&mut self, url: &str) -> Result<(), PageError>;

    fn title(&mut self) -> Result<String, PageError>;

    fn wait_for_dom_content_loaded(&mut self) -> Result<(), PageError>;

    fn click(&mut self, locator: &Locator) -> Result<(), PageError>;

    fn fill(&mut self, locator: &Locator, text: &str) -> Result<(), PageError>;

    fn wait_for_visible(&mut self, locator: &Locator) -> Result<(), PageError>;

    /// Text of the first element matching `locator`.
    fn text_content(&mut self, locator: &Locator) -> Result<Option<String>, PageError>;
}

impl<B: Browser + ?Sized> Browser for &mut B {
    fn goto(&mut self, url: &str) -> Result<(), PageError> {
        (**self).goto(url)
    }

    fn title(&mut self) -> Result<String, PageError> {
        (**self).title()
    }

    fn wait_for_dom_content_loaded(&mut self) -> Result<(), PageError> {
        (**self).wait_for_dom_content_loaded()
    }

    fn click(&mut self, locator: &Locator) -> Result<(), PageError> {
        (**self).click(locator)
    }

    fn fill(&mut self, locator: &Locator, text: &str) -> Result<(), PageError> {
        (**self).fill(locator, text)
    }

    fn wait_for_visible(&mut self, locator: &Locator) -> Result<(), PageError> {
        (**self).wait_for_visible(locator)
    }

    fn text_content(&mut self, locator: &Locator) -> Result<Option<String>, PageError> {
        (**self).text_content(locator)
    }
}

/// Navigation shared by every page object.
#[derive(Debug)]
pub struct BasePage<B> {
    browser: B,
    base_url: String,
}

impl<B: Browser> BasePage<B> {
    pub fn new(browser: B, base_url: &str) -> Self {
        Self {
            browser,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn browser(&mut self) -> &mut B {
        &mut self.browser
    }

    /// Open `path` relative to the base URL.
    pub fn goto(&mut self, path: &str) -> Result<(), PageError> {
        let url = format!("{}{path}", self.base_url);
        debug!(url = %url, "navigating");
        self.browser.goto(&url)
    }

    pub fn title(&mut self) -> Result<String, PageError> {
        self.browser.title()
    }

    pub fn wait_for_page_load(&mut self) -> Result<(), PageError> {
        self.browser.wait_for_dom_content_loaded()
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::collections::HashMap;

    use super::*;

    /// Scripted browser: records every call and serves canned page state.
    #[derive(Debug, Default)]
    pub struct FakeBrowser {
        pub calls: Vec<String>,
        pub title: String,
        pub visible: Vec<Locator>,
        pub texts: HashMap<String, String>,
    }

    fn describe(locator: &Locator) -> String {
        match locator {
            Locator::Role { role, name } => format!("{role:?}[{name}]"),
            Locator::Css(selector) => selector.clone(),
        }
    }

    impl Browser for FakeBrowser {
        fn goto(&mut self, url: &str) -> Result<(), PageError> {
            self.calls.push(format!("goto {url}"));
            Ok(())
        }

        fn title(&mut self) -> Result<String, PageError> {
            Ok(self.title.clone())
        }

        fn wait_for_dom_content_loaded(&mut self) -> Result<(), PageError> {
            self.calls.push("load".to_string());
            Ok(())
        }

        fn click(&mut self, locator: &Locator) -> Result<(), PageError> {
            self.calls.push(format!("click {}", describe(locator)));
            Ok(())
        }

        fn fill(&mut self, locator: &Locator, text: &str) -> Result<(), PageError> {
            self.calls.push(format!("fill {} {text}", describe(locator)));
            Ok(())
        }

        fn wait_for_visible(&mut self, locator: &Locator) -> Result<(), PageError> {
            self.calls.push(format!("wait {}", describe(locator)));
            if self.visible.contains(locator) {
                Ok(())
            } else {
                Err(PageError::Timeout(locator.clone()))
            }
        }

        fn text_content(&mut self, locator: &Locator) -> Result<Option<String>, PageError> {
            Ok(self.texts.get(&describe(locator)).cloned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::FakeBrowser;
    use super::*;

    #[test]
    fn goto_joins_base_url_and_path() {
        let mut browser = FakeBrowser::default();
        let mut page = BasePage::new(&mut browser, "https://automationexercise.com/");
        page.goto("/products").unwrap();
        page.wait_for_page_load().unwrap();
        assert_eq!(
            browser.calls,
            vec!["goto https://automationexercise.com/products", "load"]
        );
    }

    #[test]
    fn selectors_target_first_match() {
        assert_eq!(
            Locator::role(AriaRole::Heading, "AutomationExercise").selector(),
            r#"role=heading[name="AutomationExercise"] >> nth=0"#
        );
        assert_eq!(
            Locator::role(AriaRole::Link, "Products").selector(),
            r#"role=link[name="Products"] >> nth=0"#
        );
        assert_eq!(
            Locator::css(".features_items .title").selector(),
            ".features_items .title >> nth=0"
        );
    }

    #[test]
    fn title_comes_from_browser() {
        let mut browser = FakeBrowser {
            title: "Automation Exercise".to_string(),
            ..FakeBrowser::default()
        };
        let mut page = BasePage::new(&mut browser, "http://x");
        assert_eq!(page.title().unwrap(), "Automation Exercise");
    }
}
