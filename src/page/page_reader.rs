use crate::error::NavpageError;
use crate::page::Page;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Read a page description from stdin or a file
pub struct PageReader;

impl PageReader {
    /// Read and parse a page from stdin or a file path
    ///
    /// # Arguments
    /// * `path` - Optional file path. If None, reads from stdin.
    ///
    /// # Returns
    /// * `Ok(Page)` - Parsed page description
    /// * `Err(NavpageError)` - If the description is invalid or an IO error occurs
    pub fn read_page(path: Option<&Path>) -> Result<Page, NavpageError> {
        let page_str = match path {
            Some(file_path) => {
                // Read from file
                let mut file = File::open(file_path)?;
                let mut contents = String::new();
                file.read_to_string(&mut contents)?;
                contents
            }
            None => {
                // Read from stdin
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                buffer
            }
        };

        Self::parse(&page_str)
    }

    /// Parse and validate a page from a JSON string
    pub fn parse(page_str: &str) -> Result<Page, NavpageError> {
        serde_json::from_str::<Page>(page_str)
            .map_err(|e| NavpageError::InvalidPage(e.to_string()))
    }
}

#[cfg(test)]
#[path = "page_reader_tests.rs"]
mod page_reader_tests;
