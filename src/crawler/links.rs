//! Link discovery on listing pages
//!
//! Every listing page (index, brand, model, version) is a grid of containers,
//! each wrapping one anchor. Two variants exist:
//!
//! - `extract_links` drops containers that hold no usable anchor. Listing
//!   pages carry decorative containers, so a miss is expected and silent.
//! - `extract_links_strict` keeps one entry per container. A container
//!   without an anchor yields the empty link, which callers skip.

use crate::crawler::document::{anchor_href, Document};
use scraper::Selector;

/// Extracts the href of every container that has one, in document order
///
/// # Example
///
/// ```
/// use cars_data_scraper::crawler::{extract_links, Document};
/// use scraper::Selector;
///
/// let doc = Document::parse(r#"
///     <div class="col-4"><a href="/en/audi-a4.html">A4</a></div>
///     <div class="col-4"><img src="ad.png"></div>
/// "#);
/// let container = Selector::parse("div.col-4").unwrap();
/// let anchor = Selector::parse("a").unwrap();
/// assert_eq!(extract_links(&doc, &container, &anchor), vec!["/en/audi-a4.html"]);
/// ```
pub fn extract_links(document: &Document, container: &Selector, anchor: &Selector) -> Vec<String> {
    document
        .select(container)
        .filter_map(|element| anchor_href(element, anchor))
        .map(str::to_string)
        .collect()
}

/// Extracts one link per container, using the empty link where none exists
pub fn extract_links_strict(
    document: &Document,
    container: &Selector,
    anchor: &Selector,
) -> Vec<String> {
    document
        .select(container)
        .map(|element| anchor_href(element, anchor).unwrap_or_default().to_string())
        .collect()
}
