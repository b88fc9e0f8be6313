//! Random source capability.
//!
//! The domain never reaches for an RNG directly. Consumers such as
//! [`Dice`](crate::Dice) hold an injected `Arc<dyn RandomSource>`; production
//! generators live in the engine, deterministic ones live here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::error::DomainError;

/// Inclusive bounds a [`RandomSource`] promises to stay within.
///
/// `min <= max` always holds; deserialization goes through [`RollRange::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RollRangeFields")]
pub struct RollRange {
    min: i32,
    max: i32,
}

/// Unvalidated wire shape of a [`RollRange`].
#[derive(Deserialize)]
struct RollRangeFields {
    min: i32,
    max: i32,
}

impl TryFrom<RollRangeFields> for RollRange {
    type Error = DomainError;

    fn try_from(fields: RollRangeFields) -> Result<Self, Self::Error> {
        Self::new(fields.min, fields.max)
    }
}

impl RollRange {
    /// Create a range covering `min..=max`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `min > max`.
    pub fn new(min: i32, max: i32) -> Result<Self, DomainError> {
        if min > max {
            return Err(DomainError::validation(format!(
                "Range minimum {} exceeds maximum {}",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    /// Build a range from two bounds in either order.
    pub const fn ordered(a: i32, b: i32) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// A range containing exactly one value.
    pub fn single(value: i32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Number of distinct values in the range.
    pub fn span(&self) -> u64 {
        u64::from(self.max.abs_diff(self.min)) + 1
    }
}

impl fmt::Display for RollRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// A source of random integers.
///
/// Each call is independent. `random()` always succeeds and always returns a
/// value inside `range()`.
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource: Send + Sync {
    fn random(&self) -> i32;

    /// The inclusive bounds of `random()`.
    fn range(&self) -> RollRange;
}

impl<T: RandomSource + ?Sized> RandomSource for &T {
    fn random(&self) -> i32 {
        (**self).random()
    }

    fn range(&self) -> RollRange {
        (**self).range()
    }
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn random(&self) -> i32 {
        (**self).random()
    }

    fn range(&self) -> RollRange {
        (**self).range()
    }
}

impl<T: RandomSource + ?Sized> RandomSource for Arc<T> {
    fn random(&self) -> i32 {
        (**self).random()
    }

    fn range(&self) -> RollRange {
        (**self).range()
    }
}

/// Always returns the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedRandom(pub i32);

impl RandomSource for FixedRandom {
    fn random(&self) -> i32 {
        self.0
    }

    fn range(&self) -> RollRange {
        RollRange::single(self.0)
    }
}

/// Cycles through a fixed list of values, starting over at the end.
#[derive(Debug)]
pub struct SequenceRandom {
    values: Vec<i32>,
    range: RollRange,
    next: AtomicUsize,
}

impl SequenceRandom {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `values` is empty.
    pub fn new(values: Vec<i32>) -> Result<Self, DomainError> {
        let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
            return Err(DomainError::validation(
                "Sequence source needs at least one value",
            ));
        };
        Ok(Self {
            values,
            range: RollRange { min, max },
            next: AtomicUsize::new(0),
        })
    }
}

impl RandomSource for SequenceRandom {
    fn random(&self) -> i32 {
        let index = self.next.fetch_add(1, Ordering::Relaxed) % self.values.len();
        self.values[index]
    }

    fn range(&self) -> RollRange {
        self.range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_range_rejects_inverted_bounds() {
        assert!(matches!(
            RollRange::new(10, 1),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_roll_range_span_and_contains() {
        let range = RollRange::new(1, 10).unwrap();
        assert_eq!(range.span(), 10);
        assert!(range.contains(1));
        assert!(range.contains(10));
        assert!(!range.contains(0));
        assert!(!range.contains(11));
        assert_eq!(range.to_string(), "[1, 10]");
    }

    #[test]
    fn test_roll_range_ordered_swaps_bounds() {
        assert_eq!(RollRange::ordered(10, 1), RollRange::new(1, 10).unwrap());
    }

    #[test]
    fn test_roll_range_span_full_width() {
        let range = RollRange::new(i32::MIN, i32::MAX).unwrap();
        assert_eq!(range.span(), 1u64 << 32);
    }

    #[test]
    fn test_roll_range_serde_round_trip() {
        let range = RollRange::new(-5, 4).unwrap();
        let json = serde_json::to_value(range).unwrap();
        assert_eq!(json, serde_json::json!({ "min": -5, "max": 4 }));

        let back: RollRange = serde_json::from_value(json).unwrap();
        assert_eq!(back, range);
    }

    #[test]
    fn test_roll_range_deserialize_rejects_inverted_bounds() {
        let result = serde_json::from_str::<RollRange>(r#"{"min":1,"max":0}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("exceeds maximum"));

        assert!(serde_json::from_str::<RollRange>(
            r#"{"min":2147483647,"max":-2147483648}"#
        )
        .is_err());
    }

    #[test]
    fn test_roll_range_span_single_value() {
        assert_eq!(RollRange::single(i32::MIN).span(), 1);
        assert_eq!(RollRange::single(i32::MAX).span(), 1);
    }

    #[test]
    fn test_fixed_random_is_constant() {
        let source = FixedRandom(10);
        for _ in 0..10 {
            assert_eq!(source.random(), 10);
        }
        assert_eq!(source.range(), RollRange::single(10));
    }

    #[test]
    fn test_sequence_random_cycles() {
        let source = SequenceRandom::new(vec![3, 1, 2]).unwrap();
        let drawn: Vec<i32> = (0..7).map(|_| source.random()).collect();
        assert_eq!(drawn, vec![3, 1, 2, 3, 1, 2, 3]);
        assert_eq!(source.range(), RollRange::new(1, 3).unwrap());
    }

    #[test]
    fn test_sequence_random_rejects_empty() {
        assert!(SequenceRandom::new(vec![]).is_err());
    }

    #[test]
    fn test_forwarding_through_arc_dyn() {
        let source: Arc<dyn RandomSource> = Arc::new(FixedRandom(4));
        assert_eq!(source.random(), 4);
        assert_eq!(source.range().max(), 4);
    }
}
