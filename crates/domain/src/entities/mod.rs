//! Entities - named things that implement the `FullyNamed` capability

mod person;
mod starship;

pub use person::Person;
pub use starship::Starship;
