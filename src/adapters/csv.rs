//! CSV documents.
//!
//! Metadata lives in comment rows whose first field starts with `#`; the
//! second field is an identifier label and values start at the third:
//!
//! ```text
//! # States,Q,q0,q1
//! # Alphabet,Sigma,a,b
//! # Initial,q0,q0
//! # Accepting,F,q1
//! q0,a,q1
//! q1,b,q1
//! ```
//!
//! Spanish keys (`Estados`, `Alfabeto`, `EstadoInicial`, `EstadosAceptacion`)
//! are accepted as well. Every other non-comment row with exactly three
//! fields is a transition; remaining rows are skipped.

use crate::adapters::{DocumentFormat, DocumentParseError, DocumentParser};
use crate::core::RawAutomatonDescription;
use ::csv::{ReaderBuilder, StringRecord};

#[derive(Clone, Copy, Debug, Default)]
pub struct CsvParser;

impl DocumentParser for CsvParser {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Csv
    }

    fn parse_document(&self, text: &str) -> Result<RawAutomatonDescription, DocumentParseError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());
        let mut raw = RawAutomatonDescription::default();

        for (row, record) in reader.records().enumerate() {
            let record = record.map_err(|e| DocumentParseError::new(DocumentFormat::Csv, e))?;
            let first = record.get(0).unwrap_or_default();

            if let Some(key) = first.strip_prefix('#') {
                apply_metadata(&mut raw, key.trim(), &record);
                continue;
            }

            if record.len() == 3 {
                raw.transitions.push((
                    record[0].to_owned(),
                    record[1].to_owned(),
                    record[2].to_owned(),
                ));
            } else {
                tracing::debug!(row = row + 1, fields = record.len(), "skipping CSV row");
            }
        }

        Ok(raw)
    }
}

fn apply_metadata(raw: &mut RawAutomatonDescription, key: &str, record: &StringRecord) {
    let values = || record.iter().skip(2).map(str::to_owned).collect::<Vec<_>>();

    match key {
        "States" | "Estados" => raw.states = values(),
        "Alphabet" | "Alfabeto" => raw.alphabet = values(),
        "Initial" | "EstadoInicial" => raw.initial = record.get(2).unwrap_or_default().to_owned(),
        "Accepting" | "EstadosAceptacion" => raw.accepting = values(),
        // plain comment
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_metadata_and_transitions() {
        let raw = CsvParser
            .parse_document(
                "# States,Q,q0,q1\n\
                 # Alphabet,Sigma,a,b\n\
                 # Initial,q0,q0\n\
                 # Accepting,F,q1\n\
                 q0,a,q1\n\
                 q1,b,q1\n",
            )
            .unwrap();

        assert_eq!(raw.states, vec!["q0", "q1"]);
        assert_eq!(raw.alphabet, vec!["a", "b"]);
        assert_eq!(raw.initial, "q0");
        assert_eq!(raw.accepting, vec!["q1"]);
        assert_eq!(raw.transitions.len(), 2);
    }

    #[test]
    fn accepts_spanish_metadata_keys() {
        let raw = CsvParser
            .parse_document(
                "# Estados,Q,p,r\n\
                 # Alfabeto,Sigma,x\n\
                 # EstadoInicial,q0,p\n\
                 # EstadosAceptacion,F,r\n",
            )
            .unwrap();

        assert_eq!(raw.states, vec!["p", "r"]);
        assert_eq!(raw.alphabet, vec!["x"]);
        assert_eq!(raw.initial, "p");
        assert_eq!(raw.accepting, vec!["r"]);
    }

    #[test]
    fn plain_comments_and_odd_rows_are_skipped() {
        let raw = CsvParser
            .parse_document(
                "# transitions follow\n\
                 q0,a\n\
                 q0,a,q1,extra\n\
                 q0,b,q0\n",
            )
            .unwrap();

        assert_eq!(
            raw.transitions,
            vec![("q0".to_string(), "b".to_string(), "q0".to_string())]
        );
    }

    #[test]
    fn quoted_comma_symbol_is_kept() {
        let raw = CsvParser
            .parse_document("# Alphabet,Sigma,\",\",a\nq0,\",\",q0\n")
            .unwrap();

        assert_eq!(raw.alphabet, vec![",", "a"]);
        assert_eq!(raw.transitions[0].1, ",");
    }
}
