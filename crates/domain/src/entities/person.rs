//! Person entity - a named individual whose full name is stored as given

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::naming::FullyNamed;

/// A person identified by a stored full name.
///
/// The name is fixed at construction; there is no setter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    full_name: String,
}

impl Person {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
        }
    }

    /// Returns the stored name without allocating.
    pub fn as_str(&self) -> &str {
        &self.full_name
    }
}

impl FullyNamed for Person {
    fn full_name(&self) -> String {
        self.full_name.clone()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_is_stored_value() {
        let joe = Person::new("Joseph Rogers");
        assert_eq!(joe.full_name(), "Joseph Rogers");
        assert_eq!(joe.as_str(), "Joseph Rogers");
        assert_eq!(joe.to_string(), "Joseph Rogers");
    }

    #[test]
    fn test_empty_name_is_allowed() {
        let nobody = Person::new("");
        assert_eq!(nobody.full_name(), "");
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let joe = Person::new("Joseph Rogers");
        let json = serde_json::to_value(&joe).unwrap();
        assert_eq!(json, serde_json::json!({ "fullName": "Joseph Rogers" }));

        let back: Person = serde_json::from_value(json).unwrap();
        assert_eq!(back, joe);
    }
}
