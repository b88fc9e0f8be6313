//! Value objects - Immutable objects defined by their attributes

mod dice;

pub use dice::{Dice, RollMode};
