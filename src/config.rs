//! Suite files: batches of automata and labelled input strings.
//!
//! A suite is a TOML document with one `[[suite]]` table per automaton:
//!
//! ```toml
//! [[suite]]
//! name = "Numeric literals"
//! automaton = "numeric.json"   # relative to this file
//! show_automaton = true
//!
//! [[suite.input]]
//! label = "w3"
//! value = "+0.1234567"
//! expect = true
//! ```

use crate::adapters::{self, DocumentFormat, LoadError};
use crate::core::{Automaton, RunRecord};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading a suite file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read suite file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid suite file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Parsed suite file.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuiteConfig {
    #[serde(rename = "suite", default)]
    pub suites: Vec<Suite>,
}

/// One automaton and the inputs to run against it.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Suite {
    pub name: String,

    /// Document path; resolved against the suite file's directory on load
    pub automaton: PathBuf,

    /// Overrides extension-based format selection
    #[serde(default)]
    pub format: Option<DocumentFormat>,

    #[serde(default)]
    pub show_automaton: bool,

    #[serde(rename = "input", default)]
    pub inputs: Vec<LabeledInput>,
}

/// An input string with a display label and optional expected verdict.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabeledInput {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub expect: Option<bool>,
}

impl SuiteConfig {
    /// Read a suite file, resolving automaton paths relative to it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Self::from_toml_str(&text, base)
    }

    /// Parse suite TOML, resolving relative automaton paths against `base_dir`.
    pub fn from_toml_str(text: &str, base_dir: &Path) -> Result<Self, ConfigError> {
        let mut config: SuiteConfig = toml::from_str(text)?;
        for suite in &mut config.suites {
            if suite.automaton.is_relative() {
                suite.automaton = base_dir.join(&suite.automaton);
            }
        }
        Ok(config)
    }
}

impl Suite {
    /// Load this suite's automaton, honoring the format override.
    pub fn load_automaton(&self) -> Result<Automaton, LoadError> {
        match self.format {
            Some(format) => adapters::load_automaton_as(&self.automaton, format),
            None => adapters::load_automaton(&self.automaton),
        }
    }

    /// Run every input against an already loaded automaton.
    pub fn run(&self, automaton: &Automaton) -> SuiteOutcome {
        let results = self
            .inputs
            .iter()
            .map(|input| {
                let outcome = InputOutcome {
                    label: input.label.clone(),
                    expect: input.expect,
                    record: automaton.run(&input.value),
                };
                if !outcome.matches_expectation() {
                    tracing::warn!(
                        suite = %self.name,
                        label = %input.label,
                        expected = ?input.expect,
                        accepted = outcome.record.is_accepted(),
                        "verdict does not match expectation"
                    );
                }
                outcome
            })
            .collect();

        SuiteOutcome { results }
    }
}

/// Result of one labelled input.
#[derive(Clone, Debug)]
pub struct InputOutcome {
    pub label: String,
    pub expect: Option<bool>,
    pub record: RunRecord,
}

impl InputOutcome {
    /// Whether the verdict agrees with the expectation (vacuously true
    /// without one).
    pub fn matches_expectation(&self) -> bool {
        self.expect
            .is_none_or(|expected| expected == self.record.is_accepted())
    }
}

/// Results of running one suite.
#[derive(Clone, Debug)]
pub struct SuiteOutcome {
    pub results: Vec<InputOutcome>,
}

impl SuiteOutcome {
    pub fn mismatches(&self) -> usize {
        self.results
            .iter()
            .filter(|r| !r.matches_expectation())
            .count()
    }

    pub fn passed(&self) -> usize {
        self.results.len() - self.mismatches()
    }

    pub fn is_success(&self) -> bool {
        self.mismatches() == 0
    }
}
