use std::fmt::Debug;
use thiserror::Error;

/// Failures detected while assembling an automaton from its 5-tuple.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError<S: Debug, A: Debug> {
    #[error("no initial state was declared")]
    MissingInitialState,
    #[error("initial state {state:?} is not in the set of states")]
    InvalidInitialState { state: S },
    #[error("accepting state {state:?} is not in the set of states")]
    InvalidAcceptingState { state: S },
    #[error("transition source {state:?} is not in the set of states")]
    UnknownTransitionSource { state: S },
    #[error("transition from {state:?} uses symbol {symbol:?} which is not in the alphabet")]
    UnknownTransitionSymbol { state: S, symbol: A },
    #[error("transition from {state:?} on {symbol:?} targets {target:?} which is not in the set of states")]
    UnknownTransitionTarget { state: S, symbol: A, target: S },
}

/// Failures raised while walking an input sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessingError<S: Debug, A: Debug> {
    #[error("input symbol {symbol:?} is not in the alphabet")]
    SymbolNotInAlphabet { symbol: A },
    #[error("no transitions defined for state {state:?}")]
    NoTransitionsForState { state: S },
    #[error("no transition defined for state {state:?} with symbol {symbol:?}")]
    NoTransitionDefined { state: S, symbol: A },
}
