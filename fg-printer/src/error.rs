//! Error types for the printer library

use thiserror::Error;

/// Printer error types
#[derive(Debug, Error)]
pub enum PrintError {
    /// Ticket batch was empty, nothing to print
    #[error("Nothing to print: ticket batch is empty")]
    EmptyBatch,

    /// No print surface could be acquired
    #[error("Print surface unavailable: {0}")]
    Surface(String),

    /// IO error while handing the document to a surface
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for printer operations
pub type PrintResult<T> = Result<T, PrintError>;
