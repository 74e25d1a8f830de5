//! Parsed HTML pages and the handful of queries the crawler runs on them
//!
//! Parsing is lenient: `scraper` accepts whatever markup the site serves and
//! builds the same tree a browser would.

use crate::config::{check_selector, SelectorConfig};
use crate::ConfigResult;
use scraper::html::Select;
use scraper::{ElementRef, Html, Selector};

/// A parsed HTML page
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses markup into a document
    ///
    /// # Example
    ///
    /// ```
    /// use cars_data_scraper::crawler::Document;
    ///
    /// let doc = Document::parse(r#"<div id="main"><p>Hello</p></div>"#);
    /// assert!(doc.find_by_id("main").is_some());
    /// ```
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    /// All elements matching `selector`, in document order
    pub fn select<'a, 'b>(&'a self, selector: &'b Selector) -> Select<'a, 'b> {
        self.html.select(selector)
    }

    /// The first element carrying the given id
    pub fn find_by_id(&self, id: &str) -> Option<ElementRef<'_>> {
        let with_id = Selector::parse("[id]").ok()?;
        self.html
            .select(&with_id)
            .find(|element| element.value().id() == Some(id))
    }
}

/// Reads the href of the first anchor nested in `container`
///
/// Returns None when the container holds no matching anchor or the anchor
/// has no href. The href is trimmed, so a blank one reads as the empty link.
pub fn anchor_href<'a>(container: ElementRef<'a>, anchor: &Selector) -> Option<&'a str> {
    container
        .select(anchor)
        .next()
        .and_then(|element| element.value().attr("href"))
        .map(str::trim)
}

/// The first non-blank text node below `element`, trimmed
pub fn first_text(element: ElementRef<'_>) -> Option<String> {
    element
        .text()
        .map(str::trim)
        .find(|text| !text.is_empty())
        .map(str::to_string)
}

/// Compiled form of `SelectorConfig`
#[derive(Debug, Clone)]
pub struct Selectors {
    pub brand: Selector,
    pub model: Selector,
    pub version: Selector,
    pub motor: Selector,
    pub anchor: Selector,
    pub breadcrumb_id: String,
    pub breadcrumb_label: Selector,
    pub detail_cell: Selector,
}

impl Selectors {
    pub fn compile(config: &SelectorConfig) -> ConfigResult<Self> {
        Ok(Self {
            brand: check_selector("brand", &config.brand)?,
            model: check_selector("model", &config.model)?,
            version: check_selector("version", &config.version)?,
            motor: check_selector("motor", &config.motor)?,
            anchor: check_selector("anchor", &config.anchor)?,
            breadcrumb_id: config.breadcrumb_id.clone(),
            breadcrumb_label: check_selector("breadcrumb_label", &config.breadcrumb_label)?,
            detail_cell: check_selector("detail_cell", &config.detail_cell)?,
        })
    }
}
