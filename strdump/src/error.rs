//! All error types for the strdump crate.
//!
//! These are returned from every fallible operation (reading, scanning, rendering, writing).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown encoding `{0}`")]
    UnknownEncoding(String),

    #[error("line {line}: missing marker `{marker}`")]
    MissingMarker { line: usize, marker: String },

    #[error("invalid options: {0}")]
    InvalidOptions(String),

    #[error("unknown {kind} `{value}`")]
    UnknownValue { kind: &'static str, value: String },
}

impl Error {
    /// Creates a new invalid options error
    pub fn invalid_options(message: impl Into<String>) -> Self {
        Error::InvalidOptions(message.into())
    }

    pub(crate) fn unknown_value(kind: &'static str, value: impl Into<String>) -> Self {
        Error::UnknownValue {
            kind,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = Error::Io(io_error);
        assert!(error.to_string().contains("I/O error"));
    }

    #[test]
    fn test_json_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{ invalid json }").unwrap_err();
        let error = Error::from(json_error);
        assert!(error.to_string().starts_with("JSON error"));
    }

    #[test]
    fn test_missing_marker_error() {
        let error = Error::MissingMarker {
            line: 7,
            marker: "</string>".to_string(),
        };
        assert_eq!(error.to_string(), "line 7: missing marker `</string>`");
    }

    #[test]
    fn test_unknown_encoding_error() {
        let error = Error::UnknownEncoding("klingon".to_string());
        assert_eq!(error.to_string(), "unknown encoding `klingon`");
    }

    #[test]
    fn test_invalid_options_error() {
        let error = Error::invalid_options("close marker must not be empty");
        assert_eq!(
            error.to_string(),
            "invalid options: close marker must not be empty"
        );
    }

    #[test]
    fn test_unknown_value_error() {
        let error = Error::unknown_value("output format", "yaml");
        assert_eq!(error.to_string(), "unknown output format `yaml`");
    }

    #[test]
    fn test_error_debug() {
        let error = Error::UnknownEncoding("test".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("UnknownEncoding"));
        assert!(debug.contains("test"));
    }
}
