//! Production random sources.
//!
//! Implements `RandomSource` using `rand`. Every generator runs either on
//! `rand::thread_rng()` or on a seeded `StdRng` for reproducible runs.

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rollcall_domain::{DomainError, RandomSource, RollRange};

const TEN: RollRange = RollRange::ordered(1, 10);
const HUNDRED: RollRange = RollRange::ordered(1, 100);
const NINETEEN: RollRange = RollRange::ordered(1, 19);

/// Where a generator draws its entropy from.
enum RngBackend {
    Thread,
    Seeded(Mutex<StdRng>),
}

impl RngBackend {
    fn seeded(seed: u64) -> Self {
        Self::Seeded(Mutex::new(StdRng::seed_from_u64(seed)))
    }

    fn gen_inclusive(&self, min: i32, max: i32) -> i32 {
        match self {
            Self::Thread => rand::thread_rng().gen_range(min..=max),
            Self::Seeded(rng) => {
                // A panic mid-draw cannot leave StdRng in an invalid state.
                let mut rng = rng.lock().unwrap_or_else(PoisonError::into_inner);
                rng.gen_range(min..=max)
            }
        }
    }
}

impl fmt::Debug for RngBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Thread => write!(f, "Thread"),
            Self::Seeded(_) => write!(f, "Seeded"),
        }
    }
}

/// Uniform values in [1, 10].
#[derive(Debug)]
pub struct OneThroughTen {
    rng: RngBackend,
}

impl OneThroughTen {
    pub fn new() -> Self {
        Self {
            rng: RngBackend::Thread,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: RngBackend::seeded(seed),
        }
    }
}

impl Default for OneThroughTen {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for OneThroughTen {
    fn random(&self) -> i32 {
        self.rng.gen_inclusive(1, 10)
    }

    fn range(&self) -> RollRange {
        TEN
    }
}

/// Uniform values in [1, 100].
#[derive(Debug)]
pub struct OneThroughHundred {
    rng: RngBackend,
}

impl OneThroughHundred {
    pub fn new() -> Self {
        Self {
            rng: RngBackend::Thread,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: RngBackend::seeded(seed),
        }
    }
}

impl Default for OneThroughHundred {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for OneThroughHundred {
    fn random(&self) -> i32 {
        self.rng.gen_inclusive(1, 100)
    }

    fn range(&self) -> RollRange {
        HUNDRED
    }
}

/// Odd values in [1, 19]: a uniform 1..=10 draw mapped through `n * 2 - 1`.
///
/// On a d6 this only ever lands on odd remainders plus one, so every face
/// is even.
#[derive(Debug)]
pub struct OddThroughNineteen {
    rng: RngBackend,
}

impl OddThroughNineteen {
    pub fn new() -> Self {
        Self {
            rng: RngBackend::Thread,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: RngBackend::seeded(seed),
        }
    }
}

impl Default for OddThroughNineteen {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for OddThroughNineteen {
    fn random(&self) -> i32 {
        self.rng.gen_inclusive(1, 10) * 2 - 1
    }

    fn range(&self) -> RollRange {
        NINETEEN
    }
}

/// Selects one of the production generators by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GeneratorKind {
    #[default]
    OneThroughTen,
    OneThroughHundred,
    OddThroughNineteen,
}

impl GeneratorKind {
    /// Build the generator, seeded when `seed` is given.
    pub fn build(self, seed: Option<u64>) -> Arc<dyn RandomSource> {
        match (self, seed) {
            (Self::OneThroughTen, None) => Arc::new(OneThroughTen::new()),
            (Self::OneThroughTen, Some(seed)) => Arc::new(OneThroughTen::seeded(seed)),
            (Self::OneThroughHundred, None) => Arc::new(OneThroughHundred::new()),
            (Self::OneThroughHundred, Some(seed)) => Arc::new(OneThroughHundred::seeded(seed)),
            (Self::OddThroughNineteen, None) => Arc::new(OddThroughNineteen::new()),
            (Self::OddThroughNineteen, Some(seed)) => Arc::new(OddThroughNineteen::seeded(seed)),
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OneThroughTen => write!(f, "one-through-ten"),
            Self::OneThroughHundred => write!(f, "one-through-hundred"),
            Self::OddThroughNineteen => write!(f, "odd-through-nineteen"),
        }
    }
}

impl FromStr for GeneratorKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "one-through-ten" => Ok(Self::OneThroughTen),
            "one-through-hundred" => Ok(Self::OneThroughHundred),
            "odd-through-nineteen" => Ok(Self::OddThroughNineteen),
            other => Err(DomainError::validation(format!(
                "Unknown generator: '{}'",
                other
            ))),
        }
    }
}
