// modthree Library - Deterministic Finite Automata
// Exposes the generic automaton engine and its mod-three specialization

pub mod cli;
pub mod config;
pub mod fsm;
pub mod modthree;
pub mod telemetry;

// Re-export key types for easy access
pub use fsm::{Automaton, AutomatonBuilder, ConstructionError, ProcessingError, TransitionTable};
pub use modthree::{init_mod_three, mod_three, BinaryDigit, ModThree, ModThreeError, Remainder};
pub use crate::config::{config, init_config, LoggingConfig, ModThreeConfig};
pub use telemetry::init_telemetry;
