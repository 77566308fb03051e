//! Builder for constructing automata in code.

use crate::core::{Automaton, MalformedAutomatonError, RawAutomatonDescription, StateId, Symbol};

/// Builder for constructing automata with a fluent API.
///
/// Collects the five-tuple piece by piece and validates everything at
/// [`build`](AutomatonBuilder::build), through the same checks used for
/// loaded documents.
#[derive(Clone, Debug, Default)]
pub struct AutomatonBuilder {
    raw: RawAutomatonDescription,
}

impl AutomatonBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a state.
    pub fn state(mut self, state: impl Into<StateId>) -> Self {
        self.raw.states.push(state.into().to_string());
        self
    }

    /// Declare several states.
    pub fn states<I, T>(self, states: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<StateId>,
    {
        states.into_iter().fold(self, |builder, state| builder.state(state))
    }

    /// Declare an input symbol: a `char`, or a multi-character token.
    pub fn symbol(mut self, symbol: impl Into<Symbol>) -> Self {
        self.raw.alphabet.push(symbol.into().to_string());
        self
    }

    /// Declare several input symbols.
    pub fn alphabet<I, T>(self, symbols: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Symbol>,
    {
        symbols.into_iter().fold(self, |builder, symbol| builder.symbol(symbol))
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateId>) -> Self {
        self.raw.initial = state.into().to_string();
        self
    }

    /// Mark a state as accepting.
    pub fn accept(mut self, state: impl Into<StateId>) -> Self {
        self.raw.accepting.push(state.into().to_string());
        self
    }

    /// Mark several states as accepting.
    pub fn accepting<I, T>(self, states: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<StateId>,
    {
        states.into_iter().fold(self, |builder, state| builder.accept(state))
    }

    /// Add a `(from, symbol) -> to` rule.
    pub fn transition(
        mut self,
        from: impl Into<StateId>,
        symbol: impl Into<Symbol>,
        to: impl Into<StateId>,
    ) -> Self {
        self.raw.transitions.push((
            from.into().to_string(),
            symbol.into().to_string(),
            to.into().to_string(),
        ));
        self
    }

    /// Validate and build the automaton.
    pub fn build(self) -> Result<Automaton, MalformedAutomatonError> {
        Automaton::from_description(self.raw)
    }
}
