use crate::classifier::Classifier;

/// Bounded, fail-closed retry around classification attempts.
///
/// Each attempt goes through the classifier, which opens and releases its
/// own session. When every attempt errors, the handle resolves to "taken"
/// rather than aborting the scan: an unreachable or ambiguous page is
/// never reported as available.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    max_retries: u32,
}

impl RetryPolicy {
    /// `max_retries` is the total attempt budget and must be >= 1
    /// (enforced by config validation).
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries: max_retries.max(1),
        }
    }

    /// Classifies one handle, retrying transient failures.
    ///
    /// Resolves to the availability verdict, or `false` after the budget
    /// is exhausted. Never errors; every failure is logged.
    pub async fn attempt<C: Classifier>(&self, classifier: &C, handle: &str) -> bool {
        for attempt in 1..=self.max_retries {
            match classifier.check(handle).await {
                Ok(available) => return available,
                Err(e) => {
                    tracing::warn!(
                        "{} (attempt {}/{}): {}",
                        handle,
                        attempt,
                        self.max_retries,
                        e
                    );
                }
            }
        }

        tracing::error!(
            "{}: giving up after {} attempts, marking as taken",
            handle,
            self.max_retries
        );
        false
    }
}
