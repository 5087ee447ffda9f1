use thiserror::Error;

/// Error types for the compute module
#[derive(Error, Debug)]
pub enum ComputeError {
    /// Error from the database operations
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// The chart of accounts is structurally invalid (unknown parent or a
    /// parent chain that loops back on itself)
    #[error("Chart of accounts error: {0}")]
    Chart(String),

    /// A row points at a related record that could not be resolved
    #[error("Missing relation: {0}")]
    MissingRelation(String),

    /// Requested page lies past the end of a non-empty result set
    #[error("Page {page} is out of range, last page is {last_page}")]
    PageOutOfRange { page: u64, last_page: u64 },
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
