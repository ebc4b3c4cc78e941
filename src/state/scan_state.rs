use crate::state::HandleSet;
use serde::{Deserialize, Serialize};

/// The working state of a scan run: which handles have been checked and
/// which of those were available.
///
/// Invariant: `available` is a subset of `checked`. The only mutator is
/// [`ScanState::record`], which enforces it; both sets grow monotonically
/// within a run and across resumed runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanState {
    #[serde(default)]
    pub checked: HandleSet,
    #[serde(default)]
    pub available: HandleSet,
}

impl ScanState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome for one fully processed handle.
    ///
    /// A handle is recorded as checked whether the verdict came from a
    /// successful classification or from a retries-exhausted give-up.
    pub fn record(&mut self, handle: &str, available: bool) {
        self.checked.insert(handle);
        if available {
            self.available.insert(handle);
        }
    }

    /// True if the handle was already processed (this run or a prior one).
    pub fn is_checked(&self, handle: &str) -> bool {
        self.checked.contains(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_available() {
        let mut state = ScanState::new();
        state.record("alice", true);

        assert!(state.is_checked("alice"));
        assert!(state.available.contains("alice"));
    }

    #[test]
    fn test_record_taken() {
        let mut state = ScanState::new();
        state.record("bob", false);

        assert!(state.is_checked("bob"));
        assert!(!state.available.contains("bob"));
    }

    #[test]
    fn test_available_always_subset_of_checked() {
        let mut state = ScanState::new();
        state.record("a", true);
        state.record("b", false);
        state.record("c", true);

        assert!(state.available.is_subset(&state.checked));
        assert_eq!(state.checked.len(), 3);
        assert_eq!(state.available.len(), 2);
    }

    #[test]
    fn test_re_record_does_not_duplicate() {
        let mut state = ScanState::new();
        state.record("a", true);
        state.record("a", true);

        assert_eq!(state.checked.len(), 1);
        assert_eq!(state.available.len(), 1);
    }

    #[test]
    fn test_serde_roundtrip_preserves_order() {
        let mut state = ScanState::new();
        state.record("alice", true);
        state.record("bob", false);

        let json = serde_json::to_string(&state).unwrap();
        let restored: ScanState = serde_json::from_str(&json).unwrap();

        let checked: Vec<&str> = restored.checked.iter().collect();
        assert_eq!(checked, vec!["alice", "bob"]);
        assert!(restored.available.contains("alice"));
        assert!(!restored.available.contains("bob"));
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let restored: ScanState = serde_json::from_str("{}").unwrap();
        assert!(restored.checked.is_empty());
        assert!(restored.available.is_empty());
    }
}
