/// Whether building the [`Nfa`](super::model::Nfa) succeeded.
pub type BuildResult<T> = Result<T, BuildError>;

/// Structural problem found while building an [`Nfa`](super::model::Nfa).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// No start state was configured.
    #[error("invalid automaton definition: no start state given")]
    MissingStartState,
    /// The start state is not one of the declared states.
    #[error("invalid automaton definition: start state `{0}` is not a declared state")]
    UnknownStartState(String),
    /// An accept state is not one of the declared states.
    #[error("invalid automaton definition: accept state `{0}` is not a declared state")]
    UnknownAcceptState(String),
    /// One end of a transition is not one of the declared states. `name` is the
    /// offending end.
    #[error(
        "invalid automaton definition: transition `{from}` --{symbol:?}--> `{to}` references \
         undeclared state `{name}`"
    )]
    UnknownTransitionState {
        from: String,
        symbol: char,
        to: String,
        name: String,
    },
    /// The same state name was declared twice.
    #[error("invalid automaton definition: state `{0}` is declared more than once")]
    DuplicateState(String),
    /// A transition consumes a symbol the alphabet does not declare. Such a
    /// transition could never be taken.
    #[error("invalid automaton definition: transition from `{from}` on {symbol:?} uses a symbol outside the alphabet")]
    SymbolNotInAlphabet { from: String, symbol: char },
}
