//! Engine configuration loaded from environment variables.
//!
//! | Variable              | Default           |
//! |-----------------------|-------------------|
//! | `ROLLCALL_DICE_SIDES` | `6`               |
//! | `ROLLCALL_ROLL_COUNT` | `5`               |
//! | `ROLLCALL_GENERATOR`  | `one-through-ten` |
//! | `ROLLCALL_ROLL_MODE`  | `modulo`          |
//! | `ROLLCALL_SEED`       | unset (entropy)   |

use std::str::FromStr;

use rollcall_domain::{Dice, RollMode};

use super::error::ConfigError;
use super::random::GeneratorKind;

pub const DICE_SIDES_VAR: &str = "ROLLCALL_DICE_SIDES";
pub const ROLL_COUNT_VAR: &str = "ROLLCALL_ROLL_COUNT";
pub const GENERATOR_VAR: &str = "ROLLCALL_GENERATOR";
pub const ROLL_MODE_VAR: &str = "ROLLCALL_ROLL_MODE";
pub const SEED_VAR: &str = "ROLLCALL_SEED";

/// Settings for the demo driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Sides on the configured die, within `1..=i32::MAX`.
    pub dice_sides: i64,
    /// Rolls printed per die
    pub roll_count: usize,
    pub generator: GeneratorKind,
    pub roll_mode: RollMode,
    /// Seed for every generator; `None` uses the thread-local RNG.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dice_sides: 6,
            roll_count: 5,
            generator: GeneratorKind::default(),
            roll_mode: RollMode::default(),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary key lookup. Unset or blank keys fall back
    /// to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let read = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let dice_sides = parse_or(read(DICE_SIDES_VAR), DICE_SIDES_VAR, defaults.dice_sides)?;
        Dice::validate_sides(dice_sides)?;

        let roll_count = parse_or(read(ROLL_COUNT_VAR), ROLL_COUNT_VAR, defaults.roll_count)?;
        let generator = parse_or(read(GENERATOR_VAR), GENERATOR_VAR, defaults.generator)?;
        let roll_mode = parse_or(read(ROLL_MODE_VAR), ROLL_MODE_VAR, defaults.roll_mode)?;
        let seed = read(SEED_VAR)
            .map(|raw| raw.parse().map_err(|_| ConfigError::invalid(SEED_VAR, raw)))
            .transpose()?;

        Ok(Self {
            dice_sides,
            roll_count,
            generator,
            roll_mode,
            seed,
        })
    }
}

fn parse_or<T: FromStr>(
    raw: Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        Some(raw) => raw.parse().map_err(|_| ConfigError::invalid(key, raw)),
        None => Ok(default),
    }
}
