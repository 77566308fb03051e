//! Alphabet symbols.
//!
//! Input strings are consumed one `char` at a time, but a described alphabet
//! may also contain longer tokens. Tokens are kept as declared so they show up
//! in reports and survive a round trip; they just never match an input
//! character.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of an automaton's alphabet.
///
/// # Example
///
/// ```rust
/// use dfa_runner::core::Symbol;
///
/// assert_eq!(Symbol::from('a').as_char(), Some('a'));
/// assert_eq!(Symbol::from("id").as_char(), None);
/// assert_eq!(Symbol::from("a"), 'a');
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The input character this symbol matches, if it is exactly one `char`.
    pub fn as_char(&self) -> Option<char> {
        let mut chars = self.0.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }

    /// Whether this is a multi-character token that no input can match.
    pub fn is_token(&self) -> bool {
        self.as_char().is_none()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Self(c.to_string())
    }
}

impl From<&str> for Symbol {
    fn from(label: &str) -> Self {
        Self(label.to_owned())
    }
}

impl From<String> for Symbol {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl PartialEq<char> for Symbol {
    fn eq(&self, other: &char) -> bool {
        self.as_char() == Some(*other)
    }
}

impl PartialEq<str> for Symbol {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Symbol {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
