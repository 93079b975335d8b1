//! Error types for the lexnet library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`LexnetError`] enum.
//!
//! # Examples
//!
//! ```
//! use lexnet::error::{LexnetError, Result};
//!
//! fn resolve(id: &str) -> Result<()> {
//!     Err(LexnetError::unknown_id(id))
//! }
//!
//! match resolve("99999999-n") {
//!     Ok(_) => println!("Resolved"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for lexnet operations.
///
/// A lookup that finds nothing is not an error: [`crate::WordNet::lookup`] and
/// [`crate::search::SearchEngine::search_one`] return `None` instead.
#[derive(Error, Debug)]
pub enum LexnetError {
    /// I/O errors while reading dictionary or configuration files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A dictionary source line does not follow the positional grammar.
    #[error("Parse error in {file} at line {line}: {message}")]
    Parse {
        file: String,
        line: usize,
        message: String,
    },

    /// A synset id was never produced by the collector.
    #[error("Unknown synset id: {0}")]
    UnknownId(String),

    /// A caller supplied a value that violates a precondition.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A search pattern could not be compiled.
    #[error("Query error: {0}")]
    Query(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with LexnetError.
pub type Result<T> = std::result::Result<T, LexnetError>;

impl LexnetError {
    /// Create a new parse error for `file` at the 1-based `line`.
    pub fn parse<F: Into<String>, S: Into<String>>(file: F, line: usize, msg: S) -> Self {
        LexnetError::Parse {
            file: file.into(),
            line,
            message: msg.into(),
        }
    }

    /// Create a new unknown id error.
    pub fn unknown_id<S: Into<String>>(id: S) -> Self {
        LexnetError::UnknownId(id.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LexnetError::InvalidArgument(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        LexnetError::Query(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        LexnetError::InvalidArgument(format!("Invalid configuration: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LexnetError::Other(msg.into())
    }

    /// Whether this error reports an id missing from the collector.
    pub fn is_unknown_id(&self) -> bool {
        matches!(self, LexnetError::UnknownId(_))
    }

    /// Whether this error reports a malformed source line.
    pub fn is_parse(&self) -> bool {
        matches!(self, LexnetError::Parse { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = LexnetError::unknown_id("00000001-n");
        assert_eq!(error.to_string(), "Unknown synset id: 00000001-n");
        assert!(error.is_unknown_id());

        let error = LexnetError::parse("index.noun", 7, "missing sense count");
        assert_eq!(
            error.to_string(),
            "Parse error in index.noun at line 7: missing sense count"
        );
        assert!(error.is_parse());

        let error = LexnetError::invalid_config("no parts of speech");
        assert_eq!(
            error.to_string(),
            "Invalid argument: Invalid configuration: no parts of speech"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let lexnet_error = LexnetError::from(io_error);

        match lexnet_error {
            LexnetError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
