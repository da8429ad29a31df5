//! Failure statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{FailureType, ProcessingStats};

/// Logs how many files were skipped during a run, per failure type.
///
/// Prints nothing when every file was read.
pub fn print_failure_statistics(stats: &ProcessingStats) {
    let total = stats.total();
    if total == 0 {
        return;
    }

    info!("Skipped files ({} total):", total);
    for failure in FailureType::iter() {
        let count = stats.get_count(failure);
        if count > 0 {
            info!("   {}: {}", failure.as_str(), count);
        }
    }
}
