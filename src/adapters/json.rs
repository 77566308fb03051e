//! JSON documents.

use crate::adapters::{DocumentFormat, DocumentParseError, DocumentParser};
use crate::core::RawAutomatonDescription;

/// Parses `{"Q": [...], "Sigma": [...], "q0": ..., "F": [...], "delta": [[from, symbol, to], ...]}`.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonParser;

impl DocumentParser for JsonParser {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Json
    }

    fn parse_document(&self, text: &str) -> Result<RawAutomatonDescription, DocumentParseError> {
        serde_json::from_str(text).map_err(|e| DocumentParseError::new(DocumentFormat::Json, e))
    }
}
