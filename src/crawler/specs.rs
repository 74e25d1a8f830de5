//! Attribute extraction from a motor page
//!
//! A motor page names its place in the catalogue through the breadcrumb
//! (`Home › Brand › Model › Version › Motor`) and lists its specifications as
//! a flat run of detail cells alternating label, value, label, value...

use crate::crawler::document::{first_text, Document, Selectors};
use crate::record::Record;
use crate::MalformedPageError;
use scraper::{ElementRef, Selector};

/// Breadcrumb entries needed: the home link plus the four hierarchy levels
const BREADCRUMB_ENTRIES: usize = 5;

/// The four hierarchy names read from a motor page breadcrumb
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub brand: String,
    pub model: String,
    pub version: String,
    pub motor: String,
}

/// Reads the breadcrumb of a motor page
///
/// Positions 1 to 4 of the breadcrumb anchors hold Brand, Model, Version and
/// Motor; position 0 is the home link. Each name is the first text inside the
/// anchor's label element.
pub fn parse_breadcrumb(
    document: &Document,
    selectors: &Selectors,
) -> Result<Breadcrumb, MalformedPageError> {
    let nav = document
        .find_by_id(&selectors.breadcrumb_id)
        .ok_or(MalformedPageError::MissingBreadcrumb)?;

    let entries: Vec<ElementRef<'_>> = nav.select(&selectors.anchor).collect();
    if entries.len() < BREADCRUMB_ENTRIES {
        return Err(MalformedPageError::IncompleteBreadcrumb {
            found: entries.len(),
        });
    }

    let label = |position: usize| {
        entries[position]
            .select(&selectors.breadcrumb_label)
            .next()
            .and_then(first_text)
            .ok_or(MalformedPageError::MissingLabel { position })
    };

    Ok(Breadcrumb {
        brand: label(1)?,
        model: label(2)?,
        version: label(3)?,
        motor: label(4)?,
    })
}

/// Extracts the full record of a motor page
///
/// Fails only when the breadcrumb cannot be read. Detail cell pairs with a
/// blank label or value are skipped; a trailing unpaired cell is dropped; a
/// repeated label keeps the value of its last occurrence.
pub fn extract_specs(
    document: &Document,
    selectors: &Selectors,
) -> Result<Record, MalformedPageError> {
    let crumb = parse_breadcrumb(document, selectors)?;
    let mut record = Record::new(crumb.brand, crumb.model, crumb.version, crumb.motor);

    for (name, value) in detail_pairs(document, &selectors.detail_cell) {
        record.insert(name, value);
    }

    Ok(record)
}

/// Pairs detail cells (0, 1), (2, 3)... and reads each pair
fn detail_pairs(document: &Document, detail_cell: &Selector) -> Vec<(String, String)> {
    let cells: Vec<ElementRef<'_>> = document.select(detail_cell).collect();

    cells
        .chunks_exact(2)
        .filter_map(|pair| read_pair(pair[0], pair[1]))
        .collect()
}

/// Reads one label/value pair; None when either side has no text
fn read_pair(label: ElementRef<'_>, value: ElementRef<'_>) -> Option<(String, String)> {
    let name = first_text(label)?;
    let name = name.trim_end_matches(':').trim_end();
    if name.is_empty() {
        return None;
    }

    Some((name.to_string(), first_text(value)?))
}
