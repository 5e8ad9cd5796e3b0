pub mod compute;

pub use compute::{ComputeCommand, ComputeReport};
