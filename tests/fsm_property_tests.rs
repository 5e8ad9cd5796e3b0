// Property-Based Testing for the Automaton Engine
// Checks construction and walk invariants over randomly generated automata

use modthree::{Automaton, ConstructionError, ProcessingError, TransitionTable};
use proptest::prelude::*;
use std::collections::HashMap;

// Total transition table over states 0..n and symbols 0..m
fn total_table(n: u8, m: u8, targets: &[u8]) -> TransitionTable<u8, u8> {
    let mut table: TransitionTable<u8, u8> = HashMap::new();
    for state in 0..n {
        for symbol in 0..m {
            let index = state as usize * m as usize + symbol as usize;
            table.entry(state).or_default().insert(symbol, targets[index] % n);
        }
    }
    table
}

// Strategy for a total automaton: (state count, symbol count, targets, initial)
fn total_automaton() -> impl Strategy<Value = (u8, u8, Vec<u8>, u8)> {
    (1u8..=6, 1u8..=4).prop_flat_map(|(n, m)| {
        (
            Just(n),
            Just(m),
            prop::collection::vec(any::<u8>(), (n as usize) * (m as usize)),
            0..n,
        )
    })
}

proptest! {
    #[test]
    fn construction_fails_iff_initial_state_undeclared(
        states in prop::collection::vec(0u8..10, 0..6),
        initial in 0u8..10,
    ) {
        let result = Automaton::new(states.clone(), [0u8], initial, Vec::new(), HashMap::new());

        if states.contains(&initial) {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(result.unwrap_err(), ConstructionError::InvalidInitialState { state: initial });
        }
    }

    #[test]
    fn construction_fails_iff_accepting_state_undeclared(
        states in prop::collection::vec(0u8..10, 1..6),
        accepting in prop::collection::vec(0u8..10, 0..6),
    ) {
        let initial = states[0];
        let result = Automaton::new(states.clone(), [0u8], initial, accepting.clone(), HashMap::new());

        match accepting.iter().find(|s| !states.contains(s)) {
            Some(&first) => prop_assert_eq!(
                result.unwrap_err(),
                ConstructionError::InvalidAcceptingState { state: first }
            ),
            None => prop_assert!(result.is_ok()),
        }
    }

    #[test]
    fn empty_walk_returns_initial_state((n, m, targets, initial) in total_automaton()) {
        let fsm = Automaton::new(0..n, 0..m, initial, Vec::new(), total_table(n, m, &targets)).unwrap();
        prop_assert_eq!(fsm.process(Vec::<u8>::new()), Ok(initial));
    }

    #[test]
    fn walk_rejects_first_symbol_outside_alphabet(
        (n, m, targets, initial) in total_automaton(),
        input in prop::collection::vec(0u8..6, 0..20),
    ) {
        let fsm = Automaton::new(0..n, 0..m, initial, Vec::new(), total_table(n, m, &targets)).unwrap();
        let result = fsm.process(&input);

        match input.iter().find(|&&symbol| symbol >= m) {
            Some(&first) => prop_assert_eq!(result, Err(ProcessingError::SymbolNotInAlphabet { symbol: first })),
            None => prop_assert!(result.is_ok()),
        }
    }

    #[test]
    fn walk_is_deterministic_and_leaves_automaton_unchanged(
        (n, m, targets, initial) in total_automaton(),
        input in prop::collection::vec(0u8..4, 0..20),
    ) {
        let fsm = Automaton::new(0..n, 0..m, initial, 0..n, total_table(n, m, &targets)).unwrap();
        let before = fsm.transitions().clone();

        let first = fsm.process(&input);
        let second = fsm.process(&input);

        prop_assert_eq!(first, second);
        prop_assert_eq!(fsm.transitions(), &before);
        prop_assert_eq!(fsm.initial_state(), &initial);
    }

    #[test]
    fn walk_equals_repeated_steps(
        (n, m, targets, initial) in total_automaton(),
        input in prop::collection::vec(0u8..4, 0..20),
    ) {
        let fsm = Automaton::new_strict(0..n, 0..m, initial, Vec::new(), total_table(n, m, &targets)).unwrap();

        let mut current = initial;
        let mut expected = Ok(initial);
        for symbol in &input {
            match fsm.step(&current, symbol) {
                Ok(&next) => {
                    current = next;
                    expected = Ok(next);
                }
                Err(e) => {
                    expected = Err(e);
                    break;
                }
            }
        }

        prop_assert_eq!(fsm.process(&input), expected);
    }
}
