//! Macros for ergonomic automaton construction.

/// Build an [`Automaton`](crate::core::Automaton) from an inline five-tuple.
///
/// States are written as identifiers, symbols as `char` literals. Expands to
/// [`AutomatonBuilder`](crate::builder::AutomatonBuilder) calls, so the
/// result is a `Result<Automaton, MalformedAutomatonError>`.
///
/// # Example
///
/// ```
/// use dfa_runner::dfa;
///
/// let ends_in_b = dfa! {
///     states: [s, t],
///     alphabet: ['a', 'b'],
///     initial: s,
///     accepting: [t],
///     transitions: [
///         (s, 'a') => s,
///         (s, 'b') => t,
///         (t, 'a') => s,
///         (t, 'b') => t,
///     ],
/// }
/// .unwrap();
///
/// assert!(ends_in_b.accepts("aab"));
/// assert!(!ends_in_b.accepts("aba"));
/// ```
#[macro_export]
macro_rules! dfa {
    (
        states: [$($state:ident),* $(,)?],
        alphabet: [$($symbol:literal),* $(,)?],
        initial: $initial:ident,
        accepting: [$($accept:ident),* $(,)?],
        transitions: [$( ($from:ident, $on:literal) => $to:ident ),* $(,)?]
        $(,)?
    ) => {
        $crate::builder::AutomatonBuilder::new()
            $(.state(stringify!($state)))*
            $(.symbol($symbol))*
            .initial(stringify!($initial))
            $(.accept(stringify!($accept)))*
            $(.transition(stringify!($from), $on, stringify!($to)))*
            .build()
    };
}
