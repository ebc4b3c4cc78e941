//! Scan engine - the resumable per-handle processing loop
//!
//! The engine walks the deduplicated handle list and, for each handle not
//! already covered by the checkpoint, runs a strictly ordered pipeline:
//! classify (with retries) -> record into state -> flush checkpoint ->
//! report -> pace. Handles are never processed concurrently; the flush for
//! handle N completes before handle N+1 starts, which bounds data loss on
//! interruption to the in-flight handle.

mod retry;

pub use retry::RetryPolicy;

use crate::checkpoint::Checkpoint;
use crate::classifier::Classifier;
use crate::config::ScanConfig;
use crate::state::ScanState;
use crate::Result;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// What a completed run found.
#[derive(Debug, Clone, Copy)]
pub struct ScanSummary {
    /// Handles classified this run
    pub scanned: usize,

    /// Handles skipped because a prior run already covered them
    pub skipped: usize,

    /// Available handles found this run
    pub available_found: usize,

    /// Available handles known in total, including prior runs
    pub total_available: usize,
}

/// Orchestrates one scan run over a handle list.
///
/// The engine is the sole mutator of the shared [`ScanState`]; the handle
/// to the state is shared only so the interrupt path in `main` can flush
/// whatever has accumulated when the run is cut short.
pub struct ScanEngine<C: Classifier> {
    classifier: C,
    retry: RetryPolicy,
    checkpoint: Checkpoint,
    state: Arc<Mutex<ScanState>>,
    delay: Duration,
}

impl<C: Classifier> ScanEngine<C> {
    pub fn new(
        classifier: C,
        checkpoint: Checkpoint,
        state: Arc<Mutex<ScanState>>,
        scan: &ScanConfig,
    ) -> Self {
        Self {
            classifier,
            retry: RetryPolicy::new(scan.max_retries),
            checkpoint,
            state,
            delay: Duration::from_millis(scan.delay_ms),
        }
    }

    /// Runs the scan over `handles`, resuming past checked ones.
    ///
    /// Per-handle side effects are strictly ordered: classify, mutate
    /// state, persist, report, pace. Already-checked handles are skipped
    /// without side effects or pacing.
    pub async fn run(&mut self, handles: &[String]) -> Result<ScanSummary> {
        let mut summary = ScanSummary {
            scanned: 0,
            skipped: 0,
            available_found: 0,
            total_available: 0,
        };

        for handle in handles {
            if self.state.lock().unwrap().is_checked(handle) {
                tracing::debug!("{} already checked, skipping", handle);
                summary.skipped += 1;
                continue;
            }

            let available = self.retry.attempt(&self.classifier, handle).await;

            // The lock is held only for the mutation; the flush works on a
            // snapshot so the interrupt path can always grab the state.
            let snapshot = {
                let mut state = self.state.lock().unwrap();
                state.record(handle, available);
                state.clone()
            };
            self.checkpoint.flush(&snapshot)?;

            println!(
                "{:<24} : {}",
                handle,
                if available { "AVAILABLE" } else { "taken" }
            );

            summary.scanned += 1;
            if available {
                summary.available_found += 1;
            }

            // Pacing against the target; runs after every classified
            // handle, never after a skip.
            tokio::time::sleep(self.delay).await;
        }

        summary.total_available = self.state.lock().unwrap().available.len();

        tracing::info!(
            "Scan pass complete: {} classified, {} skipped, {} available in total",
            summary.scanned,
            summary.skipped,
            summary.total_available
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::ClassifyError;
    use crate::config::OutputConfig;
    use std::collections::HashMap;
    use tempfile::TempDir;

    /// Scripted classifier that records which handles it was asked about.
    struct ScriptedClassifier {
        verdicts: HashMap<String, bool>,
        asked: Mutex<Vec<String>>,
    }

    impl ScriptedClassifier {
        fn new(verdicts: &[(&str, bool)]) -> Self {
            Self {
                verdicts: verdicts
                    .iter()
                    .map(|(h, v)| (h.to_string(), *v))
                    .collect(),
                asked: Mutex::new(Vec::new()),
            }
        }

        fn asked(&self) -> Vec<String> {
            self.asked.lock().unwrap().clone()
        }
    }

    impl Classifier for ScriptedClassifier {
        async fn check(&self, handle: &str) -> std::result::Result<bool, ClassifyError> {
            self.asked.lock().unwrap().push(handle.to_string());
            match self.verdicts.get(handle) {
                Some(verdict) => Ok(*verdict),
                None => Err(ClassifyError::Timeout {
                    handle: handle.to_string(),
                }),
            }
        }
    }

    fn fixture(dir: &TempDir) -> (Checkpoint, ScanConfig) {
        let output = OutputConfig {
            checkpoint_path: dir
                .path()
                .join("progress.json")
                .to_string_lossy()
                .into_owned(),
            available_path: dir
                .path()
                .join("available.json")
                .to_string_lossy()
                .into_owned(),
        };
        let scan = ScanConfig {
            delay_ms: 1,
            ..ScanConfig::default()
        };
        (Checkpoint::new(&output, "testhash"), scan)
    }

    fn handles(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_end_to_end_verdicts() {
        let dir = TempDir::new().unwrap();
        let (checkpoint, scan) = fixture(&dir);
        let classifier = ScriptedClassifier::new(&[("alice", true), ("bob", false)]);
        let state = Arc::new(Mutex::new(ScanState::new()));

        let mut engine = ScanEngine::new(classifier, checkpoint.clone(), state, &scan);
        let summary = engine.run(&handles(&["alice", "bob"])).await.unwrap();

        assert_eq!(summary.scanned, 2);
        assert_eq!(summary.available_found, 1);
        assert_eq!(summary.total_available, 1);

        let persisted = checkpoint.load();
        let checked: Vec<&str> = persisted.checked.iter().collect();
        assert_eq!(checked, vec!["alice", "bob"]);
        assert!(persisted.available.contains("alice"));
        assert!(!persisted.available.contains("bob"));
    }

    #[tokio::test]
    async fn test_resume_skips_checked_handles() {
        let dir = TempDir::new().unwrap();
        let (checkpoint, scan) = fixture(&dir);

        // Prior run already decided "alice"
        let mut prior = ScanState::new();
        prior.record("alice", true);

        let classifier = ScriptedClassifier::new(&[("bob", false)]);
        let state = Arc::new(Mutex::new(prior));
        let mut engine = ScanEngine::new(classifier, checkpoint.clone(), state, &scan);

        let summary = engine.run(&handles(&["alice", "bob"])).await.unwrap();

        assert_eq!(summary.scanned, 1);
        assert_eq!(summary.skipped, 1);

        // The classifier must never have been asked about "alice", and
        // its prior verdict must survive
        assert_eq!(engine.classifier.asked(), vec!["bob"]);
        let persisted = checkpoint.load();
        assert!(persisted.available.contains("alice"));
        assert!(persisted.is_checked("bob"));
    }

    #[tokio::test]
    async fn test_exhausted_retries_recorded_as_taken() {
        let dir = TempDir::new().unwrap();
        let (checkpoint, mut scan) = fixture(&dir);
        scan.max_retries = 2;

        // No verdict scripted for "x": every attempt errors
        let classifier = ScriptedClassifier::new(&[]);
        let state = Arc::new(Mutex::new(ScanState::new()));
        let mut engine = ScanEngine::new(classifier, checkpoint.clone(), state, &scan);

        let summary = engine.run(&handles(&["x"])).await.unwrap();

        assert_eq!(summary.available_found, 0);
        assert_eq!(engine.classifier.asked(), vec!["x", "x"]);

        let persisted = checkpoint.load();
        assert!(persisted.is_checked("x"));
        assert!(!persisted.available.contains("x"));
    }

    #[tokio::test]
    async fn test_checkpoint_grows_monotonically_across_runs() {
        let dir = TempDir::new().unwrap();
        let (checkpoint, scan) = fixture(&dir);

        // First run covers "a"
        let classifier = ScriptedClassifier::new(&[("a", true)]);
        let state = Arc::new(Mutex::new(checkpoint.load()));
        let mut engine = ScanEngine::new(classifier, checkpoint.clone(), state, &scan);
        engine.run(&handles(&["a"])).await.unwrap();

        // Second run rehydrates and adds "b"
        let classifier = ScriptedClassifier::new(&[("b", false)]);
        let state = Arc::new(Mutex::new(checkpoint.load()));
        let mut engine = ScanEngine::new(classifier, checkpoint.clone(), state, &scan);
        engine.run(&handles(&["a", "b"])).await.unwrap();

        let persisted = checkpoint.load();
        let checked: Vec<&str> = persisted.checked.iter().collect();
        assert_eq!(checked, vec!["a", "b"]);
        assert!(persisted.available.contains("a"));
        assert!(persisted.available.is_subset(&persisted.checked));
    }
}
