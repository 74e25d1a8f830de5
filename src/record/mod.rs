//! Extracted data: one `Record` per motor page, one `BrandBatch` per brand
//!
//! A record's key set is not fixed. Every record starts with the four
//! breadcrumb fields; the attributes that follow vary from page to page, so
//! consumers must not assume a schema.

mod batch;

pub use batch::BrandBatch;

/// Breadcrumb field holding the brand name
pub const BRAND: &str = "Brand";
/// Breadcrumb field holding the model name
pub const MODEL: &str = "Model";
/// Breadcrumb field holding the version name
pub const VERSION: &str = "Version";
/// Breadcrumb field holding the motor name
pub const MOTOR: &str = "Motor";

/// Ordered attribute-name → attribute-value mapping for one motor page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// Creates a record holding only the breadcrumb fields
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        version: impl Into<String>,
        motor: impl Into<String>,
    ) -> Self {
        Self {
            fields: vec![
                (BRAND.to_string(), brand.into()),
                (MODEL.to_string(), model.into()),
                (VERSION.to_string(), version.into()),
                (MOTOR.to_string(), motor.into()),
            ],
        }
    }

    /// Inserts an attribute; an existing key keeps its position and takes the new value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn brand(&self) -> &str {
        self.get(BRAND).unwrap_or_default()
    }

    pub fn motor(&self) -> &str {
        self.get(MOTOR).unwrap_or_default()
    }

    /// Attribute names in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
