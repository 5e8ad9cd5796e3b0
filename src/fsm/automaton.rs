use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use super::builder::AutomatonBuilder;
use super::errors::{ConstructionError, ProcessingError};

/// The delta mapping: state -> (symbol -> successor). It may be partial.
pub type TransitionTable<S, A> = HashMap<S, HashMap<A, S>>;

/// A deterministic finite automaton defined by its 5-tuple.
///
/// The definition is immutable once built. Walks only read it and keep their
/// own current state, so one instance can serve any number of walks, including
/// walks running on other threads.
#[derive(Debug, Clone)]
pub struct Automaton<S, A> {
    states: HashSet<S>,
    alphabet: HashSet<A>,
    initial_state: S,
    accepting_states: HashSet<S>,
    transitions: TransitionTable<S, A>,
}

impl<S, A> Automaton<S, A>
where
    S: Eq + Hash + Clone + Debug,
    A: Eq + Hash + Clone + Debug,
{
    pub fn builder() -> AutomatonBuilder<S, A> {
        AutomatonBuilder::new()
    }

    /// Create an automaton, checking that the initial state and every
    /// accepting state are declared states.
    ///
    /// The transition table is taken as-is. Entries that reference undeclared
    /// states or symbols only surface if a walk reaches them; use
    /// [`Automaton::new_strict`] to reject them up front.
    pub fn new<IS, IA, IF>(
        states: IS,
        alphabet: IA,
        initial_state: S,
        accepting_states: IF,
        transitions: TransitionTable<S, A>,
    ) -> Result<Self, ConstructionError<S, A>>
    where
        IS: IntoIterator<Item = S>,
        IA: IntoIterator<Item = A>,
        IF: IntoIterator<Item = S>,
    {
        let states: HashSet<S> = states.into_iter().collect();

        if !states.contains(&initial_state) {
            return Err(ConstructionError::InvalidInitialState { state: initial_state });
        }

        let mut accepting = HashSet::new();
        for state in accepting_states {
            if !states.contains(&state) {
                return Err(ConstructionError::InvalidAcceptingState { state });
            }
            accepting.insert(state);
        }

        let alphabet: HashSet<A> = alphabet.into_iter().collect();

        tracing::debug!(
            states = states.len(),
            symbols = alphabet.len(),
            accepting = accepting.len(),
            sources = transitions.len(),
            "Automaton constructed"
        );

        Ok(Self {
            states,
            alphabet,
            initial_state,
            accepting_states: accepting,
            transitions,
        })
    }

    /// Same as [`Automaton::new`], then cross-checks the transition table
    /// against the declared states and alphabet.
    pub fn new_strict<IS, IA, IF>(
        states: IS,
        alphabet: IA,
        initial_state: S,
        accepting_states: IF,
        transitions: TransitionTable<S, A>,
    ) -> Result<Self, ConstructionError<S, A>>
    where
        IS: IntoIterator<Item = S>,
        IA: IntoIterator<Item = A>,
        IF: IntoIterator<Item = S>,
    {
        let automaton = Self::new(states, alphabet, initial_state, accepting_states, transitions)?;
        automaton.validate_transitions()?;
        Ok(automaton)
    }

    /// Check that every source and target in the transition table is a declared
    /// state and every symbol is in the alphabet. Missing entries are fine.
    ///
    /// Entries are visited in order of their debug rendering so the reported
    /// error does not depend on hash order.
    pub fn validate_transitions(&self) -> Result<(), ConstructionError<S, A>> {
        let mut sources: Vec<(&S, &HashMap<A, S>)> = self.transitions.iter().collect();
        sources.sort_by_cached_key(|(state, _)| format!("{state:?}"));

        for (state, edges) in sources {
            if !self.states.contains(state) {
                return Err(ConstructionError::UnknownTransitionSource { state: state.clone() });
            }

            let mut edges: Vec<(&A, &S)> = edges.iter().collect();
            edges.sort_by_cached_key(|(symbol, _)| format!("{symbol:?}"));

            for (symbol, target) in edges {
                if !self.alphabet.contains(symbol) {
                    return Err(ConstructionError::UnknownTransitionSymbol {
                        state: state.clone(),
                        symbol: symbol.clone(),
                    });
                }
                if !self.states.contains(target) {
                    return Err(ConstructionError::UnknownTransitionTarget {
                        state: state.clone(),
                        symbol: symbol.clone(),
                        target: target.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Take a single transition out of `state` on `symbol`.
    pub fn step(&self, state: &S, symbol: &A) -> Result<&S, ProcessingError<S, A>> {
        if !self.alphabet.contains(symbol) {
            return Err(ProcessingError::SymbolNotInAlphabet { symbol: symbol.clone() });
        }

        let edges = self
            .transitions
            .get(state)
            .ok_or_else(|| ProcessingError::NoTransitionsForState { state: state.clone() })?;

        edges.get(symbol).ok_or_else(|| ProcessingError::NoTransitionDefined {
            state: state.clone(),
            symbol: symbol.clone(),
        })
    }

    /// Walk `input` from the initial state and return the state reached.
    ///
    /// Stops at the first symbol that cannot be consumed; nothing from the
    /// partial walk is returned. An empty input yields the initial state.
    /// The result is the reached state, not an accept/reject verdict; see
    /// [`Automaton::is_accepting`].
    pub fn process<I>(&self, input: I) -> Result<S, ProcessingError<S, A>>
    where
        I: IntoIterator,
        I::Item: Borrow<A>,
    {
        let mut current = &self.initial_state;

        for (position, item) in input.into_iter().enumerate() {
            let symbol: &A = item.borrow();
            let next = self.step(current, symbol)?;
            tracing::trace!(position, from = ?current, symbol = ?symbol, to = ?next, "Transition taken");
            current = next;
        }

        Ok(current.clone())
    }

    pub fn is_accepting(&self, state: &S) -> bool {
        self.accepting_states.contains(state)
    }

    pub fn states(&self) -> &HashSet<S> {
        &self.states
    }

    pub fn alphabet(&self) -> &HashSet<A> {
        &self.alphabet
    }

    pub fn initial_state(&self) -> &S {
        &self.initial_state
    }

    pub fn accepting_states(&self) -> &HashSet<S> {
        &self.accepting_states
    }

    pub fn transitions(&self) -> &TransitionTable<S, A> {
        &self.transitions
    }
}
