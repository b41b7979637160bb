//! Run-scoped comparison counter.

use serde::Serialize;

/// Counts pairwise ordering decisions made by one sort invocation.
///
/// The harness creates a fresh tracker per run; algorithms only ever call
/// [`ComparisonTracker::record`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ComparisonTracker {
    comparisons: u64,
}

impl ComparisonTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record(&mut self) {
        self.comparisons += 1;
    }

    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    pub fn reset(&mut self) {
        self.comparisons = 0;
    }
}
