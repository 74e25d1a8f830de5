//! Per-brand CSV export
//!
//! Records in one batch do not share a schema, so columns are computed when
//! the file is written: the union of every record's keys, in order of first
//! appearance, behind a leading index column. Missing values are empty cells.

use crate::record::BrandBatch;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Field delimiter of the export files
pub const DELIMITER: u8 = b';';

/// Errors that can occur while exporting a brand
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("batch is empty, no brand to name the file after")]
    EmptyBatch,

    #[error("brand '{0}' cannot be used in a file name")]
    InvalidFileName(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// A batch laid out as rows under a shared header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Builds the table, deriving columns from the records
    pub fn from_batch(batch: &BrandBatch) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for (_, record) in batch.iter() {
            for key in record.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.to_string());
                }
            }
        }

        let rows = batch
            .iter()
            .map(|(index, record)| {
                std::iter::once(index.to_string())
                    .chain(
                        columns
                            .iter()
                            .map(|column| record.get(column).unwrap_or_default().to_string()),
                    )
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    /// Header row: an unnamed index column, then the attribute columns
    pub fn header(&self) -> Vec<&str> {
        std::iter::once("")
            .chain(self.columns.iter().map(String::as_str))
            .collect()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

/// Path of the export file for a brand: `<directory>/cars_<brand>.csv`
pub fn export_path(directory: &Path, brand: &str) -> ExportResult<PathBuf> {
    if brand.contains(&['/', '\\', '\0'][..]) || brand == "." || brand == ".." {
        return Err(ExportError::InvalidFileName(brand.to_string()));
    }

    Ok(directory.join(format!("cars_{}.csv", brand)))
}

/// Writes a brand batch to its CSV file, replacing any previous export
///
/// # Arguments
///
/// * `batch` - Records of one brand; record 0 names the file
/// * `directory` - Existing output directory
///
/// # Returns
///
/// * `Ok(PathBuf)` - Path of the written file
/// * `Err(ExportError)` - Empty batch, unusable brand name, or write failure
pub fn export_batch(batch: &BrandBatch, directory: &Path) -> ExportResult<PathBuf> {
    let first = batch.first().ok_or(ExportError::EmptyBatch)?;
    let path = export_path(directory, first.brand())?;

    let table = Table::from_batch(batch);

    tracing::info!("Writing {}", path.display());

    let mut writer = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .from_path(&path)?;

    writer.write_record(table.header())?;
    for row in table.rows() {
        writer.write_record(row)?;
    }
    writer.flush()?;

    tracing::debug!("Wrote {} rows to {}", table.rows().len(), path.display());

    Ok(path)
}
