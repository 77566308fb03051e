//! Format adapters turning source documents into automata.
//!
//! Each supported format implements [`DocumentParser`], producing a
//! [`RawAutomatonDescription`]. The description is then validated by
//! [`Automaton::from_description`]; adapters never build automata on their
//! own.
//!
//! # Example
//!
//! ```rust
//! use dfa_runner::adapters::{parse_automaton, DocumentFormat};
//!
//! let yaml = "
//! Q: [q0, q1]
//! Sigma: [a, b]
//! q0: q0
//! F: [q1]
//! delta:
//!   - [q0, a, q1]
//!   - [q1, b, q1]
//! ";
//!
//! let automaton = parse_automaton(yaml, DocumentFormat::Yaml).unwrap();
//! assert!(automaton.accepts("abb"));
//! ```

mod csv;
mod error;
mod json;
mod xml;
mod yaml;

pub use self::csv::CsvParser;
pub use error::{DocumentParseError, LoadError, UnknownFormatError};
pub use json::JsonParser;
pub use xml::XmlParser;
pub use yaml::YamlParser;

use crate::core::{Automaton, RawAutomatonDescription};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Converts the text of one document format into a raw description.
pub trait DocumentParser: Send + Sync {
    /// The format this parser reads.
    fn format(&self) -> DocumentFormat;

    /// Parse a whole document.
    fn parse_document(&self, text: &str) -> Result<RawAutomatonDescription, DocumentParseError>;
}

/// Supported source document formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Json,
    #[serde(alias = "yml")]
    Yaml,
    Xml,
    Csv,
}

static JSON: JsonParser = JsonParser;
static YAML: YamlParser = YamlParser;
static XML: XmlParser = XmlParser;
static CSV: CsvParser = CsvParser;

impl DocumentFormat {
    /// Select a format from a file extension, ignoring case.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yml" | "yaml" => Some(Self::Yaml),
            "xml" => Some(Self::Xml),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }

    /// Select a format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// The parser for this format.
    pub fn parser(self) -> &'static dyn DocumentParser {
        match self {
            Self::Json => &JSON,
            Self::Yaml => &YAML,
            Self::Xml => &XML,
            Self::Csv => &CSV,
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
            Self::Xml => "XML",
            Self::Csv => "CSV",
        })
    }
}

impl FromStr for DocumentFormat {
    type Err = UnknownFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_extension(s.trim_start_matches('.'))
            .ok_or_else(|| UnknownFormatError(s.to_owned()))
    }
}

/// Parse document text into an unvalidated description.
pub fn parse_description(
    text: &str,
    format: DocumentFormat,
) -> Result<RawAutomatonDescription, DocumentParseError> {
    format.parser().parse_document(text)
}

/// Parse and validate document text.
pub fn parse_automaton(text: &str, format: DocumentFormat) -> Result<Automaton, LoadError> {
    let raw = parse_description(text, format)?;
    Ok(Automaton::from_description(raw)?)
}

/// Load an automaton from a file, choosing the format by extension.
pub fn load_automaton(path: impl AsRef<Path>) -> Result<Automaton, LoadError> {
    let path = path.as_ref();
    let format = DocumentFormat::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    load_automaton_as(path, format)
}

/// Load an automaton from a file in an explicit format.
pub fn load_automaton_as(
    path: impl AsRef<Path>,
    format: DocumentFormat,
) -> Result<Automaton, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let automaton = parse_automaton(&text, format)?;

    tracing::debug!(
        path = %path.display(),
        %format,
        states = automaton.states().len(),
        transitions = automaton.transitions().len(),
        "automaton loaded"
    );

    Ok(automaton)
}
