//! Keyed loading flags for in-flight backend operations.
//!
//! Every remote operation has its own flag so unrelated workflows never
//! contend on shared loading state. Flags are flipped through an RAII guard:
//! acquired synchronously before a request starts and released when the
//! request settles, on every exit path.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Identifies one of the fixed remote operations the backend exposes.
///
/// The display form (`summary`, `query`, ...) doubles as the loading key.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Summary,
    Ratings,
    Query,
    Feedback,
    Style,
    Template,
    Completion,
}

/// Tracks which operations currently have a request in flight.
///
/// Cloning is cheap and all clones observe the same flags; the tracker is
/// shared between the dispatcher (which flips flags) and frontends (which
/// only read them).
///
/// Overlap policy: a second dispatch on a busy key re-asserts the flag and
/// each settlement clears it, so the final value reflects whichever request
/// settles last. Neither request is cancelled or rejected.
#[derive(Debug, Clone, Default)]
pub struct LoadingTracker {
    flags: Arc<Mutex<HashMap<Operation, bool>>>,
}

impl LoadingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `operation` as in flight and returns a guard that clears the
    /// flag when dropped.
    ///
    /// The flag is set before this function returns, i.e. strictly before
    /// the request future is first polled.
    pub fn begin(&self, operation: Operation) -> LoadingGuard {
        self.lock().insert(operation, true);
        LoadingGuard {
            tracker: self.clone(),
            operation,
        }
    }

    /// Whether `operation` currently has a request in flight.
    pub fn is_loading(&self, operation: Operation) -> bool {
        self.lock().get(&operation).copied().unwrap_or(false)
    }

    fn clear(&self, operation: Operation) {
        self.lock().insert(operation, false);
    }

    // The lock only ever guards bool flips, so a poisoned mutex still holds
    // consistent data and can be recovered.
    fn lock(&self) -> MutexGuard<'_, HashMap<Operation, bool>> {
        self.flags.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Clears the owning operation's loading flag on drop.
#[must_use = "dropping the guard immediately would clear the loading flag"]
pub struct LoadingGuard {
    tracker: LoadingTracker,
    operation: Operation,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.tracker.clear(self.operation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_set_between_begin_and_drop() {
        let tracker = LoadingTracker::new();
        assert!(!tracker.is_loading(Operation::Summary));

        let guard = tracker.begin(Operation::Summary);
        assert!(tracker.is_loading(Operation::Summary));

        drop(guard);
        assert!(!tracker.is_loading(Operation::Summary));
    }

    #[test]
    fn test_flag_cleared_on_early_return() {
        fn failing_dispatch(tracker: &LoadingTracker) -> Result<(), String> {
            let _guard = tracker.begin(Operation::Query);
            Err("backend unavailable".to_string())
        }

        let tracker = LoadingTracker::new();
        assert!(failing_dispatch(&tracker).is_err());
        assert!(!tracker.is_loading(Operation::Query));
    }

    #[test]
    fn test_keys_do_not_contend() {
        let tracker = LoadingTracker::new();
        let _summary = tracker.begin(Operation::Summary);
        let _feedback = tracker.begin(Operation::Feedback);

        assert!(tracker.is_loading(Operation::Summary));
        assert!(tracker.is_loading(Operation::Feedback));
        assert!(!tracker.is_loading(Operation::Ratings));
    }

    #[test]
    fn test_overlapping_guards_last_settlement_wins() {
        let tracker = LoadingTracker::new();
        let first = tracker.begin(Operation::Completion);
        let second = tracker.begin(Operation::Completion);
        assert!(tracker.is_loading(Operation::Completion));

        // The earlier settlement clears the shared flag even though the
        // second request is still in flight.
        drop(first);
        assert!(!tracker.is_loading(Operation::Completion));

        drop(second);
        assert!(!tracker.is_loading(Operation::Completion));
    }

    #[test]
    fn test_operation_keys_parse() {
        assert_eq!("summary".parse::<Operation>().unwrap(), Operation::Summary);
        assert_eq!(Operation::Ratings.to_string(), "ratings");
    }
}
