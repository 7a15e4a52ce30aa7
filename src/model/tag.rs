//! Key/value photo tags with case-insensitive equality
//!
//! A tag is a `(name, value)` pair such as `("person", "alice")` or
//! `("location", "paris")`. Two tags are equal when both fields match
//! ignoring case, and hashing agrees with equality so tags behave correctly
//! in hashed collections. Tags are never mutated after construction.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A `(name, value)` metadata pair attached to a photo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    name: String,
    value: String,
}

impl Tag {
    /// Create a new tag
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The tag's name (its type, e.g. "person")
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The tag's value (e.g. "alice")
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Render the tag as `name=value`
    #[must_use]
    pub fn pair_string(&self) -> String {
        format!("{}={}", self.name, self.value)
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.name.to_lowercase() == other.name.to_lowercase()
            && self.value.to_lowercase() == other.value.to_lowercase()
    }
}

impl Eq for Tag {}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.to_lowercase().hash(state);
        self.value.to_lowercase().hash(state);
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} : {}", self.name, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_equality_is_case_insensitive() {
        let a = Tag::new("Person", "Alice");
        let b = Tag::new("person", "ALICE");
        let c = Tag::new("person", "bob");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_equality_checks_both_fields() {
        let a = Tag::new("person", "alice");
        let b = Tag::new("location", "alice");

        assert_ne!(a, b);
    }

    #[test]
    fn test_hash_agrees_with_equality() {
        let mut set = HashSet::new();
        set.insert(Tag::new("Location", "Paris"));

        assert!(set.contains(&Tag::new("location", "PARIS")));
        assert!(!set.contains(&Tag::new("location", "london")));
    }

    #[test]
    fn test_display_formats() {
        let tag = Tag::new("person", "alice");
        assert_eq!(tag.to_string(), "person : alice");
        assert_eq!(tag.pair_string(), "person=alice");
    }
}
