use thiserror::Error;

/// Errors raised by the court store.
/// A failed operation never leaves a partial mutation behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Court not found: {0}")]
    CourtNotFound(String),

    #[error("Item not found: {item} on court {court}")]
    ItemNotFound { court: String, item: String },

    #[error("Court already exists: {0}")]
    DuplicateCourt(String),
}

impl StoreError {
    /// True for either flavour of missing court or item.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::CourtNotFound(_) | StoreError::ItemNotFound { .. })
    }
}

/// Errors raised while reading a setup workbook.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Failed to read workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("Sheet not found: {0}")]
    MissingSheet(String),

    #[error("Column not found in sheet {sheet}: {column}")]
    MissingColumn { sheet: String, column: String },
}
