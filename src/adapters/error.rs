//! Adapter error types.

use crate::adapters::DocumentFormat;
use crate::core::MalformedAutomatonError;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A source document could not be parsed into a description.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("failed to parse {format} document: {message}")]
pub struct DocumentParseError {
    pub format: DocumentFormat,
    pub message: String,
}

impl DocumentParseError {
    pub fn new(format: DocumentFormat, message: impl fmt::Display) -> Self {
        Self {
            format,
            message: message.to_string(),
        }
    }
}

/// A format name did not match any supported format.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown document format '{0}' (expected json, yaml, xml or csv)")]
pub struct UnknownFormatError(pub String);

/// Errors that can occur while loading an automaton from a document.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File extension does not map to a supported format
    #[error("unsupported document format for '{}' (expected .json, .yml, .yaml, .xml or .csv)", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// Document could not be read
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document syntax or shape is invalid
    #[error(transparent)]
    Parse(#[from] DocumentParseError),

    /// Document parsed but describes an invalid automaton
    #[error(transparent)]
    Malformed(#[from] MalformedAutomatonError),
}
