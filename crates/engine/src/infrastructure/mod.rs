//! Infrastructure implementations.
//!
//! Contains `RandomSource` implementations backed by `rand` and the
//! environment-driven configuration.

pub mod config;
pub mod error;
pub mod random;

pub use config::EngineConfig;
pub use error::ConfigError;
pub use random::{GeneratorKind, OddThroughNineteen, OneThroughHundred, OneThroughTen};
