//! Dice value object
//!
//! A die owns its side count and an injected [`RandomSource`]. It never
//! constructs a generator itself, so any source (thread RNG, seeded RNG,
//! fixed value, mock) can sit behind the same die.
//!
//! The classic roll is `(random() mod sides) + 1`. That formula is biased
//! whenever the generator's range is not a multiple of `sides`
//! (a 1..=10 source on a d6 lands on 1..=4 more often than on 5..=6).
//! [`RollMode::Rejection`] is the opt-in unbiased alternative.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::DomainError;
use crate::random::{RandomSource, RollRange};

/// Draws attempted by rejection sampling before falling back to modulo.
const MAX_REJECTION_ATTEMPTS: u32 = 64;

/// How a raw generator value is mapped onto a face.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollMode {
    /// `(random() mod sides) + 1`
    #[default]
    Modulo,
    /// Discard draws from the incomplete tail of the generator's range,
    /// then map the rest uniformly onto `1..=sides`.
    Rejection,
}

impl fmt::Display for RollMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Modulo => write!(f, "modulo"),
            Self::Rejection => write!(f, "rejection"),
        }
    }
}

impl FromStr for RollMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "modulo" => Ok(Self::Modulo),
            "rejection" => Ok(Self::Rejection),
            other => Err(DomainError::validation(format!(
                "Unknown roll mode: '{}'",
                other
            ))),
        }
    }
}

/// A die with a fixed number of sides and an injected random source.
#[derive(Clone)]
pub struct Dice {
    sides: i32,
    mode: RollMode,
    generator: Arc<dyn RandomSource>,
}

impl Dice {
    /// Create a die using the classic modulo mapping.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidConfiguration` if `sides` is not in
    /// `1..=i32::MAX`.
    pub fn new(sides: i64, generator: Arc<dyn RandomSource>) -> Result<Self, DomainError> {
        Self::with_mode(sides, generator, RollMode::Modulo)
    }

    /// Create a die with an explicit roll mode.
    pub fn with_mode(
        sides: i64,
        generator: Arc<dyn RandomSource>,
        mode: RollMode,
    ) -> Result<Self, DomainError> {
        let sides = Self::validate_sides(sides)?;
        Ok(Self {
            sides,
            mode,
            generator,
        })
    }

    /// Check a side count without building a die.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidConfiguration` if `sides` is not in
    /// `1..=i32::MAX`.
    pub fn validate_sides(sides: i64) -> Result<i32, DomainError> {
        if sides <= 0 {
            return Err(DomainError::invalid_configuration(format!(
                "Dice must have at least one side, got {}",
                sides
            )));
        }
        i32::try_from(sides).map_err(|_| {
            DomainError::invalid_configuration(format!(
                "Dice cannot have more than {} sides, got {}",
                i32::MAX,
                sides
            ))
        })
    }

    pub fn sides(&self) -> i32 {
        self.sides
    }

    pub fn mode(&self) -> RollMode {
        self.mode
    }

    /// The documented range of the injected generator.
    pub fn generator_range(&self) -> RollRange {
        self.generator.range()
    }

    /// Roll once. The result is always in `1..=sides`.
    pub fn roll(&self) -> i32 {
        match self.mode {
            RollMode::Modulo => self.face_from(self.generator.random()),
            RollMode::Rejection => self.roll_rejecting(),
        }
    }

    /// Roll `count` times.
    pub fn roll_many(&self, count: usize) -> Vec<i32> {
        (0..count).map(|_| self.roll()).collect()
    }

    // rem_euclid keeps negative generator values inside 1..=sides.
    fn face_from(&self, value: i32) -> i32 {
        value.rem_euclid(self.sides) + 1
    }

    fn roll_rejecting(&self) -> i32 {
        let range = self.generator.range();
        let span = range.span();
        let sides = self.sides as u64;

        if span < sides {
            return self.face_from(self.generator.random());
        }

        // Offsets at or above `accepted` belong to the incomplete final block.
        let accepted = span - span % sides;
        let mut last = range.min();
        for _ in 0..MAX_REJECTION_ATTEMPTS {
            let value = self.generator.random();
            last = value;
            if !range.contains(value) {
                break;
            }
            let offset = (i64::from(value) - i64::from(range.min())) as u64;
            if offset < accepted {
                return (offset % sides) as i32 + 1;
            }
        }
        self.face_from(last)
    }
}

impl fmt::Debug for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dice")
            .field("sides", &self.sides)
            .field("mode", &self.mode)
            .field("generator_range", &self.generator.range())
            .finish()
    }
}
