use std::fmt;
use std::sync::LazyLock;

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::fsm::{Automaton, ConstructionError, ProcessingError};

/// States of the remainder automaton, one per residue class mod 3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Remainder {
    Zero,
    One,
    Two,
}

impl Remainder {
    pub const ALL: [Remainder; 3] = [Remainder::Zero, Remainder::One, Remainder::Two];

    /// Get the integer remainder this state stands for
    pub fn value(self) -> u8 {
        match self {
            Remainder::Zero => 0,
            Remainder::One => 1,
            Remainder::Two => 2,
        }
    }
}

impl fmt::Display for Remainder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Remainder::Zero => "S0",
            Remainder::One => "S1",
            Remainder::Two => "S2",
        };
        write!(f, "{}", label)
    }
}

// Serialized as its display label
impl Serialize for Remainder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Input alphabet: a single binary digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BinaryDigit {
    Zero,
    One,
}

impl BinaryDigit {
    pub const ALL: [BinaryDigit; 2] = [BinaryDigit::Zero, BinaryDigit::One];
}

impl TryFrom<char> for BinaryDigit {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '0' => Ok(BinaryDigit::Zero),
            '1' => Ok(BinaryDigit::One),
            other => Err(other),
        }
    }
}

impl fmt::Display for BinaryDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryDigit::Zero => write!(f, "0"),
            BinaryDigit::One => write!(f, "1"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModThreeError {
    #[error("input character {character:?} at position {position} is not a binary digit")]
    InvalidDigit { character: char, position: usize },
    #[error(transparent)]
    Walk(#[from] ProcessingError<Remainder, BinaryDigit>),
    #[error("mod-three automaton is unavailable: {0}")]
    Unavailable(ConstructionError<Remainder, BinaryDigit>),
}

/// Computes the value of a binary string (most significant digit first) mod 3
/// with a three-state remainder automaton.
#[derive(Debug, Clone)]
pub struct ModThree {
    automaton: Automaton<Remainder, BinaryDigit>,
}

impl ModThree {
    /// Build the fixed automaton. Each transition applies `r' = (2r + d) mod 3`.
    pub fn new() -> Result<Self, ConstructionError<Remainder, BinaryDigit>> {
        use BinaryDigit as D;
        use Remainder as R;

        let automaton = Automaton::builder()
            .states(Remainder::ALL)
            .alphabet(BinaryDigit::ALL)
            .initial_state(R::Zero)
            // every state is accepting
            .accepting_states(Remainder::ALL)
            .transition(R::Zero, D::Zero, R::Zero)
            .transition(R::Zero, D::One, R::One)
            .transition(R::One, D::Zero, R::Two)
            .transition(R::One, D::One, R::Zero)
            .transition(R::Two, D::Zero, R::One)
            .transition(R::Two, D::One, R::Two)
            .build_strict()?;

        Ok(Self { automaton })
    }

    pub fn automaton(&self) -> &Automaton<Remainder, BinaryDigit> {
        &self.automaton
    }

    /// Walk `input` and return the remainder state reached.
    ///
    /// Every character is converted before the walk starts, so a bad
    /// character fails the call without consuming any digits.
    pub fn final_state(&self, input: &str) -> Result<Remainder, ModThreeError> {
        let digits = input
            .chars()
            .enumerate()
            .map(|(position, c)| {
                BinaryDigit::try_from(c).map_err(|character| ModThreeError::InvalidDigit { character, position })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(self.automaton.process(&digits)?)
    }

    /// Compute `input mod 3`. The empty string is 0.
    pub fn compute(&self, input: &str) -> Result<u8, ModThreeError> {
        self.final_state(input).map(Remainder::value)
    }
}

/// Shared instance, built once on first use
static MOD_THREE: LazyLock<Result<ModThree, ConstructionError<Remainder, BinaryDigit>>> =
    LazyLock::new(ModThree::new);

/// Get the shared mod-three automaton
pub fn shared() -> Result<&'static ModThree, ModThreeError> {
    MOD_THREE
        .as_ref()
        .map_err(|e| ModThreeError::Unavailable(e.clone()))
}

/// Build the shared automaton (called at startup)
pub fn init_mod_three() -> Result<(), ModThreeError> {
    let machine = shared()?;
    tracing::debug!(states = machine.automaton().states().len(), "Mod-three automaton ready");
    Ok(())
}

/// Compute `input mod 3` with the shared automaton
pub fn mod_three(input: &str) -> Result<u8, ModThreeError> {
    shared()?.compute(input)
}
