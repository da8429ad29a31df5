//! Processing statistics tracking.
//!
//! Counts the per-file failures a run degraded around, so they can be
//! reported without aborting the pipeline.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::FailureType;

/// Failure counters for one processing run.
///
/// All failure types are initialized to zero on creation. Counters are atomic
/// so the struct can be shared by reference between the readers of a run.
#[derive(Debug)]
pub struct ProcessingStats {
    failures: HashMap<FailureType, AtomicUsize>,
}

impl ProcessingStats {
    pub fn new() -> Self {
        let mut failures = HashMap::new();
        for failure in FailureType::iter() {
            failures.insert(failure, AtomicUsize::new(0));
        }
        ProcessingStats { failures }
    }

    /// Increment a failure counter.
    pub fn increment(&self, failure: FailureType) {
        if let Some(counter) = self.failures.get(&failure) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment failure counter for {:?} which is not in the map",
                failure
            );
        }
    }

    pub fn get_count(&self, failure: FailureType) -> usize {
        self.failures
            .get(&failure)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        FailureType::iter().map(|f| self.get_count(f)).sum()
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}
