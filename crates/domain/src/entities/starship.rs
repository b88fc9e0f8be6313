//! Starship entity - a ship whose full name is composed from an optional prefix
//!
//! The full name is derived on every read, never cached, so mutating `name`
//! or `prefix` is immediately visible through [`FullyNamed::full_name`].
//!
//! Equality is defined on the rendered full name, not on the fields. Two
//! ships built differently but rendering the same name are the same ship:
//!
//! ```text
//! Starship::with_prefix("Enterprise", "USS") == Starship::new("USS Enterprise")
//! Starship::with_prefix("Serenity", "")      == Starship::new("Serenity")
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::naming::FullyNamed;

/// A starship with a required name and an optional prefix (e.g. "USS").
///
/// An empty prefix renders the same as no prefix.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Starship {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    prefix: Option<String>,
}

impl Starship {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix: None,
        }
    }

    pub fn with_prefix(name: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix: Some(prefix.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_prefix(&mut self, prefix: Option<String>) {
        self.prefix = prefix;
    }
}

impl FullyNamed for Starship {
    fn full_name(&self) -> String {
        match self.prefix.as_deref() {
            Some(prefix) if !prefix.is_empty() => format!("{} {}", prefix, self.name),
            _ => self.name.clone(),
        }
    }
}

impl PartialEq for Starship {
    fn eq(&self, other: &Self) -> bool {
        self.full_name() == other.full_name()
    }
}

impl Eq for Starship {}

// Must agree with PartialEq: hash the rendered name, not the fields.
impl Hash for Starship {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.full_name().hash(state);
    }
}

impl fmt::Display for Starship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name())
    }
}
