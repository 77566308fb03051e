//! Automaton model and simulation engine.
//!
//! This module is the pure core of the crate:
//! - State identifiers and the normalized description type
//! - Validated, immutable automata with indexed transition lookup
//! - Step, run, and acceptance over input strings
//!
//! Nothing here performs I/O. Format loading lives in `adapters` and
//! presentation in `report`.

mod automaton;
mod description;
pub mod engine;
mod error;
mod run;
mod state;
mod symbol;
mod validate;

pub use automaton::{Automaton, Transition};
pub use description::RawAutomatonDescription;
pub use engine::{accepts, run, step, Execution, StepResult};
pub use error::{MalformedAutomatonError, Violation};
pub use run::{Halt, RunRecord, TransitionRecord};
pub use state::StateId;
pub use symbol::Symbol;
