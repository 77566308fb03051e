//! dfa-runner: deterministic finite automaton simulation
//!
//! The crate is split into a pure core and the adapters around it. The core
//! holds a validated, immutable automaton and walks it over input strings;
//! loading documents, printing results and choosing what to run live in the
//! outer modules and never leak into the core.
//!
//! # Core Concepts
//!
//! - **Automaton**: validated five-tuple with indexed `(state, symbol)` lookup
//! - **Run**: derivation path, final state, and verdict for one input
//! - **Adapters**: JSON, YAML, XML and CSV documents funnel into one
//!   normalized description
//!
//! # Example
//!
//! ```rust
//! use dfa_runner::dfa;
//!
//! let automaton = dfa! {
//!     states: [q0, q1],
//!     alphabet: ['a', 'b'],
//!     initial: q0,
//!     accepting: [q1],
//!     transitions: [(q0, 'a') => q1, (q1, 'b') => q1],
//! }
//! .unwrap();
//!
//! let record = automaton.run("ab");
//! assert_eq!(record.path(), "q0 -> q1 -> q1");
//! assert!(record.is_accepted());
//!
//! let record = automaton.run("ba");
//! assert!(record.final_state().is_none());
//! assert!(!automaton.accepts("ba"));
//! ```

pub mod adapters;
pub mod builder;
pub mod config;
pub mod core;
pub mod report;

// Re-export commonly used types
pub use crate::builder::AutomatonBuilder;
pub use crate::core::{
    Automaton, MalformedAutomatonError, RawAutomatonDescription, RunRecord, StateId, Symbol,
    Violation,
};
