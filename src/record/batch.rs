use super::Record;

/// Records collected for a single brand
///
/// Indices are positions: the first record pushed is 0, the next 1, and so
/// on. Record 0 names the export file.
#[derive(Debug, Clone, Default)]
pub struct BrandBatch {
    records: Vec<Record>,
}

impl BrandBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record and returns its index
    pub fn push(&mut self, record: Record) -> usize {
        self.records.push(record);
        self.records.len() - 1
    }

    pub fn first(&self) -> Option<&Record> {
        self.records.first()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Records paired with their index
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Record)> {
        self.records.iter().enumerate()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
