//! Normalized automaton description produced by the format adapters.
//!
//! Every source format (JSON, YAML, XML, CSV) is converted into a
//! [`RawAutomatonDescription`] before validation. The serde field names are
//! the classic five-tuple names: `Q`, `Sigma`, `q0`, `F`, `delta`.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unvalidated five-tuple description of a DFA.
///
/// Scalar labels are read leniently: numbers and booleans in self-describing
/// formats are kept as their textual form, so a YAML `[q0, 0, q1]` triple
/// reads the symbol `"0"`.
///
/// # Example
///
/// ```rust
/// use dfa_runner::core::RawAutomatonDescription;
///
/// let raw: RawAutomatonDescription = serde_json::from_str(r#"{
///     "Q": ["q0", "q1"],
///     "Sigma": ["0", 1],
///     "q0": "q0",
///     "F": ["q1"],
///     "delta": [["q0", 1, "q1"]]
/// }"#).unwrap();
///
/// assert_eq!(raw.alphabet, vec!["0", "1"]);
/// assert_eq!(raw.transitions[0].1, "1");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAutomatonDescription {
    /// Declared states
    #[serde(rename = "Q", default, deserialize_with = "labels")]
    pub states: Vec<String>,

    /// Declared input symbols
    #[serde(rename = "Sigma", default, deserialize_with = "labels")]
    pub alphabet: Vec<String>,

    /// Initial state
    #[serde(rename = "q0", default, deserialize_with = "label")]
    pub initial: String,

    /// Accepting states
    #[serde(rename = "F", default, deserialize_with = "labels")]
    pub accepting: Vec<String>,

    /// Ordered `(source, symbol, destination)` triples
    #[serde(rename = "delta", default, deserialize_with = "triples")]
    pub transitions: Vec<(String, String, String)>,
}

struct Label(String);

struct LabelVisitor;

impl<'de> Visitor<'de> for LabelVisitor {
    type Value = Label;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number, or boolean label")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Label, E> {
        Ok(Label(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Label, E> {
        Ok(Label(v))
    }

    fn visit_char<E: de::Error>(self, v: char) -> Result<Label, E> {
        Ok(Label(v.to_string()))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Label, E> {
        Ok(Label(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Label, E> {
        Ok(Label(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Label, E> {
        Ok(Label(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Label, E> {
        Ok(Label(v.to_string()))
    }
}

impl<'de> Deserialize<'de> for Label {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LabelVisitor)
    }
}

fn label<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Label::deserialize(deserializer).map(|l| l.0)
}

fn labels<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let raw = Vec::<Label>::deserialize(deserializer)?;
    Ok(raw.into_iter().map(|l| l.0).collect())
}

fn triples<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<(String, String, String)>, D::Error> {
    let raw = Vec::<(Label, Label, Label)>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(from, symbol, to)| (from.0, symbol.0, to.0))
        .collect())
}
