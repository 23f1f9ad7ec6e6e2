use thiserror::Error;

/// Custom error types for navpage
#[derive(Debug, Error)]
pub enum NavpageError {
    #[error("Invalid page file: {0}")]
    InvalidPage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
