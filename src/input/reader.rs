use crate::error::ZoomizError;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Read the text to view from stdin or a file
pub struct InputReader;

impl InputReader {
    /// Read UTF-8 text from stdin or file path
    ///
    /// # Arguments
    /// * `path` - Optional file path. If None, reads from stdin.
    ///
    /// # Returns
    /// * `Ok(String)` - The text
    /// * `Err(ZoomizError)` - If the bytes are not UTF-8 or an IO error occurs
    pub fn read_text(path: Option<&Path>) -> Result<String, ZoomizError> {
        let mut bytes = Vec::new();
        match path {
            Some(file_path) => {
                File::open(file_path)?.read_to_end(&mut bytes)?;
            }
            None => {
                io::stdin().read_to_end(&mut bytes)?;
            }
        }

        Self::decode(bytes)
    }

    fn decode(bytes: Vec<u8>) -> Result<String, ZoomizError> {
        String::from_utf8(bytes).map_err(|e| ZoomizError::InvalidUtf8(e.utf8_error().to_string()))
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod reader_tests;
