//! Rollcall domain.
//!
//! Two capabilities and the types built on them:
//!
//! - [`FullyNamed`] - anything that can render a full name
//!   ([`Person`] stores it, [`Starship`] derives it)
//! - [`RandomSource`] - anything that produces random integers in a
//!   documented range, injected into [`Dice`]

pub mod entities;
pub mod error;
pub mod naming;
pub mod random;
pub mod value_objects;

pub use entities::{Person, Starship};
pub use error::DomainError;
pub use naming::FullyNamed;
pub use random::{FixedRandom, RandomSource, RollRange, SequenceRandom};
pub use value_objects::{Dice, RollMode};
