use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use super::automaton::{Automaton, TransitionTable};
use super::errors::ConstructionError;

/// Fluent construction of an [`Automaton`], one declaration at a time.
///
/// Declarations are collected as given; all validation happens in
/// [`build`](AutomatonBuilder::build) or [`build_strict`](AutomatonBuilder::build_strict).
#[derive(Debug, Clone)]
pub struct AutomatonBuilder<S, A> {
    states: Vec<S>,
    alphabet: Vec<A>,
    initial_state: Option<S>,
    accepting_states: Vec<S>,
    transitions: TransitionTable<S, A>,
}

impl<S, A> Default for AutomatonBuilder<S, A> {
    fn default() -> Self {
        Self {
            states: Vec::new(),
            alphabet: Vec::new(),
            initial_state: None,
            accepting_states: Vec::new(),
            transitions: HashMap::new(),
        }
    }
}

impl<S, A> AutomatonBuilder<S, A>
where
    S: Eq + Hash + Clone + Debug,
    A: Eq + Hash + Clone + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(mut self, state: S) -> Self {
        self.states.push(state);
        self
    }

    pub fn states(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.states.extend(states);
        self
    }

    pub fn symbol(mut self, symbol: A) -> Self {
        self.alphabet.push(symbol);
        self
    }

    pub fn alphabet(mut self, symbols: impl IntoIterator<Item = A>) -> Self {
        self.alphabet.extend(symbols);
        self
    }

    /// Set the initial state. A later call replaces an earlier one.
    pub fn initial_state(mut self, state: S) -> Self {
        self.initial_state = Some(state);
        self
    }

    pub fn accepting(mut self, state: S) -> Self {
        self.accepting_states.push(state);
        self
    }

    pub fn accepting_states(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.accepting_states.extend(states);
        self
    }

    /// Add `from --symbol--> to`. Redefining the same (state, symbol) pair keeps the last target.
    pub fn transition(mut self, from: S, symbol: A, to: S) -> Self {
        self.transitions.entry(from).or_default().insert(symbol, to);
        self
    }

    pub fn build(self) -> Result<Automaton<S, A>, ConstructionError<S, A>> {
        let initial_state = self.initial_state.ok_or(ConstructionError::MissingInitialState)?;
        Automaton::new(
            self.states,
            self.alphabet,
            initial_state,
            self.accepting_states,
            self.transitions,
        )
    }

    pub fn build_strict(self) -> Result<Automaton<S, A>, ConstructionError<S, A>> {
        let initial_state = self.initial_state.ok_or(ConstructionError::MissingInitialState)?;
        Automaton::new_strict(
            self.states,
            self.alphabet,
            initial_state,
            self.accepting_states,
            self.transitions,
        )
    }
}
