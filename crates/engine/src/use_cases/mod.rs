//! Use cases - orchestration over the domain capabilities.

pub mod compare;
pub mod roll;

pub use compare::{CompareStarships, ShipComparison};
pub use roll::{RollDice, RollOutcome};
