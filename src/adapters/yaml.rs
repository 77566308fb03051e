//! YAML documents.

use crate::adapters::{DocumentFormat, DocumentParseError, DocumentParser};
use crate::core::RawAutomatonDescription;

/// Parses the same five-tuple shape as JSON, written in YAML.
#[derive(Clone, Copy, Debug, Default)]
pub struct YamlParser;

impl DocumentParser for YamlParser {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Yaml
    }

    fn parse_document(&self, text: &str) -> Result<RawAutomatonDescription, DocumentParseError> {
        serde_yaml::from_str(text).map_err(|e| DocumentParseError::new(DocumentFormat::Yaml, e))
    }
}
