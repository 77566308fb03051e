//! XML documents.
//!
//! Expected layout, with arbitrary item tag names:
//!
//! ```xml
//! <automaton>
//!   <Q><state>q0</state><state>q1</state></Q>
//!   <Sigma><symbol>a</symbol></Sigma>
//!   <q0>q0</q0>
//!   <F><state>q1</state></F>
//!   <delta>
//!     <transition><from>q0</from><symbol>a</symbol><to>q1</to></transition>
//!   </delta>
//! </automaton>
//! ```

use crate::adapters::{DocumentFormat, DocumentParseError, DocumentParser};
use crate::core::RawAutomatonDescription;
use roxmltree::{Document, Node};

#[derive(Clone, Copy, Debug, Default)]
pub struct XmlParser;

impl DocumentParser for XmlParser {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Xml
    }

    fn parse_document(&self, text: &str) -> Result<RawAutomatonDescription, DocumentParseError> {
        let doc = Document::parse(text).map_err(|e| DocumentParseError::new(DocumentFormat::Xml, e))?;
        let mut raw = RawAutomatonDescription::default();

        for child in elements(doc.root_element()) {
            match child.tag_name().name() {
                "Q" => raw.states = elements(child).map(state_text).collect(),
                "Sigma" => raw.alphabet = elements(child).map(symbol_text).collect(),
                "F" => raw.accepting = elements(child).map(state_text).collect(),
                "q0" => raw.initial = state_text(child),
                "delta" => raw.transitions = transitions(child)?,
                other => tracing::debug!(tag = other, "ignoring unknown XML element"),
            }
        }

        Ok(raw)
    }
}

fn elements<'a, 'input>(node: Node<'a, 'input>) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|n| n.is_element())
}

fn state_text(node: Node<'_, '_>) -> String {
    node.text().unwrap_or_default().trim().to_owned()
}

// Keeps whitespace-only symbols such as a single space.
fn symbol_text(node: Node<'_, '_>) -> String {
    let text = node.text().unwrap_or_default();
    match text.trim() {
        "" => text.to_owned(),
        trimmed => trimmed.to_owned(),
    }
}

fn transitions(delta: Node<'_, '_>) -> Result<Vec<(String, String, String)>, DocumentParseError> {
    elements(delta)
        .enumerate()
        .map(|(i, item)| {
            let parts: Vec<Node<'_, '_>> = elements(item).collect();
            match parts.as_slice() {
                [from, symbol, to] => Ok((state_text(*from), symbol_text(*symbol), state_text(*to))),
                _ => Err(DocumentParseError::new(
                    DocumentFormat::Xml,
                    format!(
                        "transition #{} has {} parts, expected 3 (source, symbol, destination)",
                        i + 1,
                        parts.len()
                    ),
                )),
            }
        })
        .collect()
}
