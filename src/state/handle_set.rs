use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A set of handles that remembers insertion order.
///
/// Membership drives the resume-skip logic, while the order (first-seen
/// order from the input list) is what reaches the output artifacts, so
/// both are kept: a `Vec` for order and a `HashSet` index for lookups.
/// Serializes as a plain JSON array.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct HandleSet {
    items: Vec<String>,
    index: HashSet<String>,
}

impl HandleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a handle, returning false if it was already present.
    pub fn insert(&mut self, handle: &str) -> bool {
        if !self.index.insert(handle.to_string()) {
            return false;
        }
        self.items.push(handle.to_string());
        true
    }

    pub fn contains(&self, handle: &str) -> bool {
        self.index.contains(handle)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Returns true if every element of `self` is also in `other`.
    pub fn is_subset(&self, other: &HandleSet) -> bool {
        self.items.iter().all(|h| other.contains(h))
    }
}

impl From<Vec<String>> for HandleSet {
    fn from(items: Vec<String>) -> Self {
        let mut set = HandleSet::new();
        for item in items {
            set.insert(&item);
        }
        set
    }
}

impl From<HandleSet> for Vec<String> {
    fn from(set: HandleSet) -> Self {
        set.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let mut set = HandleSet::new();
        assert!(set.insert("alice"));
        assert!(set.contains("alice"));
        assert!(!set.contains("bob"));
    }

    #[test]
    fn test_duplicate_insert_is_noop() {
        let mut set = HandleSet::new();
        assert!(set.insert("alice"));
        assert!(!set.insert("alice"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_iteration_order_is_insertion_order() {
        let mut set = HandleSet::new();
        set.insert("charlie");
        set.insert("alice");
        set.insert("bob");
        let order: Vec<&str> = set.iter().collect();
        assert_eq!(order, vec!["charlie", "alice", "bob"]);
    }

    #[test]
    fn test_subset() {
        let mut small = HandleSet::new();
        small.insert("a");
        let mut big = HandleSet::new();
        big.insert("a");
        big.insert("b");

        assert!(small.is_subset(&big));
        assert!(!big.is_subset(&small));
        assert!(HandleSet::new().is_subset(&small));
    }

    #[test]
    fn test_serializes_as_array() {
        let mut set = HandleSet::new();
        set.insert("alice");
        set.insert("bob");
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["alice","bob"]"#);
    }

    #[test]
    fn test_deserializes_from_array() {
        let set: HandleSet = serde_json::from_str(r#"["alice","bob","alice"]"#).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("alice"));
        assert!(set.contains("bob"));
    }
}
