//! State identifiers.
//!
//! States in a described automaton are plain labels taken from the source
//! document. `StateId` wraps the label so that states and arbitrary strings
//! cannot be confused in signatures, while still allowing `&str` lookups.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identifier of a single automaton state.
///
/// Cheap to compare and hash; borrows as `str` so maps keyed by `StateId`
/// can be queried with a plain string slice.
///
/// # Example
///
/// ```rust
/// use dfa_runner::core::StateId;
///
/// let q0 = StateId::from("q0");
/// assert_eq!(q0.as_str(), "q0");
/// assert_eq!(q0, "q0");
/// assert_eq!(q0.to_string(), "q0");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(String);

impl StateId {
    /// Create an identifier from any string-like label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The underlying label.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the label is empty (an unset state in a source document).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for StateId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StateId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StateId {
    fn from(label: &str) -> Self {
        Self(label.to_owned())
    }
}

impl From<String> for StateId {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl From<&String> for StateId {
    fn from(label: &String) -> Self {
        Self(label.clone())
    }
}

impl From<&StateId> for StateId {
    fn from(id: &StateId) -> Self {
        id.clone()
    }
}

impl PartialEq<str> for StateId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for StateId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn display_is_the_raw_label() {
        assert_eq!(StateId::from("q_accept").to_string(), "q_accept");
    }

    #[test]
    fn map_keyed_by_state_accepts_str_lookup() {
        let mut map = HashMap::new();
        map.insert(StateId::from("q1"), 7);

        assert_eq!(map.get("q1"), Some(&7));
        assert_eq!(map.get("q2"), None);
    }

    #[test]
    fn empty_label_is_detected() {
        assert!(StateId::from("").is_empty());
        assert!(!StateId::from("q0").is_empty());
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&StateId::from("q0")).unwrap();
        assert_eq!(json, "\"q0\"");

        let back: StateId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, "q0");
    }
}
