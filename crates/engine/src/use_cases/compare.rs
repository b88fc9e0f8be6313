//! Compare starships use case.

use std::fmt;

use rollcall_domain::{FullyNamed, Starship};

/// Result of comparing two starships by their rendered names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipComparison {
    Same,
    NotSame,
}

impl ShipComparison {
    pub fn of(a: &Starship, b: &Starship) -> Self {
        if a == b {
            Self::Same
        } else {
            Self::NotSame
        }
    }

    pub fn is_same(self) -> bool {
        matches!(self, Self::Same)
    }
}

impl fmt::Display for ShipComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Same => write!(f, "Same Starship!"),
            Self::NotSame => write!(f, "Not the same Starship!"),
        }
    }
}

/// Compares two starships and logs the verdict.
#[derive(Debug, Default)]
pub struct CompareStarships;

impl CompareStarships {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, a: &Starship, b: &Starship) -> ShipComparison {
        let verdict = ShipComparison::of(a, b);
        tracing::info!(
            left = %a.full_name(),
            right = %b.full_name(),
            same = verdict.is_same(),
            "Starships compared"
        );
        verdict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_different_ships_are_not_same() {
        let enterprise = Starship::with_prefix("Enterprise", "USS");
        let firefly = Starship::new("firefly");
        let verdict = CompareStarships::new().execute(&enterprise, &firefly);
        assert_eq!(verdict, ShipComparison::NotSame);
        assert_eq!(verdict.to_string(), "Not the same Starship!");
    }

    #[test]
    fn test_identically_rendered_ships_are_same() {
        let composed = Starship::with_prefix("Enterprise", "USS");
        let flat = Starship::new("USS Enterprise");
        let verdict = CompareStarships::new().execute(&composed, &flat);
        assert!(verdict.is_same());
        assert_eq!(verdict.to_string(), "Same Starship!");
    }

    #[test]
    fn test_comparison_is_symmetric() {
        let a = Starship::with_prefix("Serenity", "");
        let b = Starship::new("Serenity");
        assert_eq!(ShipComparison::of(&a, &b), ShipComparison::of(&b, &a));
    }
}
