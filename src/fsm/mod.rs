// Generic deterministic finite automaton engine
//
// An automaton is validated once at construction and is read-only afterwards.
// Walks consume an input sequence from the initial state and report the state
// reached, or the first reason the sequence could not be consumed.

pub mod automaton;
pub mod builder;
pub mod errors;

pub use automaton::{Automaton, TransitionTable};
pub use builder::AutomatonBuilder;
pub use errors::{ConstructionError, ProcessingError};
