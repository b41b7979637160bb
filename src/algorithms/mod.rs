//! The five instrumented comparison sorts and the name-to-strategy registry.
//!
//! Each sorter counts one comparison per pairwise ordering decision, including
//! decisions that move nothing, and reports a snapshot to the step observer
//! after every mutation that moves the array toward its sorted form.

mod bubble;
mod insertion;
mod merge;
mod quick;
mod selection;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use selection::SelectionSort;

use crate::errors::SortBenchError;
use crate::observer::StepObserver;
use crate::order::{Direction, OrderingKey};
use crate::tracker::ComparisonTracker;
use crate::Sorter;

/// Per-invocation instrumentation shared by all algorithms: the only way an
/// algorithm may compare elements or publish a step.
pub(crate) struct Probe<'a, K: ?Sized, O: ?Sized> {
    tracker: &'a mut ComparisonTracker,
    key: &'a K,
    direction: Direction,
    observer: &'a mut O,
}

impl<'a, K: ?Sized, O: ?Sized> Probe<'a, K, O> {
    pub(crate) fn new(
        tracker: &'a mut ComparisonTracker,
        key: &'a K,
        direction: Direction,
        observer: &'a mut O,
    ) -> Self {
        Self { tracker, key, direction, observer }
    }

    /// One ordering decision: does `a` strictly belong before `b`?
    #[inline]
    pub(crate) fn precedes<T>(&mut self, a: &T, b: &T) -> bool
    where
        K: OrderingKey<T>,
    {
        self.tracker.record();
        self.direction.precedes(self.key.compare(a, b))
    }

    /// Publish a full-array snapshot built lazily by `frame`. The snapshot is
    /// only built when the observer asks for it.
    #[inline]
    pub(crate) fn step_with<T>(&mut self, frame: impl FnOnce() -> Vec<T>)
    where
        O: StepObserver<T>,
    {
        if self.observer.wants_snapshot() {
            self.observer.observe(frame());
        } else {
            self.observer.skipped();
        }
    }

    #[inline]
    pub(crate) fn step<T: Clone>(&mut self, data: &[T])
    where
        O: StepObserver<T>,
    {
        self.step_with(|| data.to_vec());
    }
}

/// Strategy selector over the five sorters
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bubble,
    Insertion,
    Selection,
    Quick,
    Merge,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Quick,
        Algorithm::Merge,
    ];

    /// Whether equal-key elements keep their input order
    pub fn is_stable(self) -> bool {
        matches!(self, Algorithm::Bubble | Algorithm::Insertion | Algorithm::Merge)
    }
}

impl Sorter for Algorithm {
    fn name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => BubbleSort.name(),
            Algorithm::Insertion => InsertionSort.name(),
            Algorithm::Selection => SelectionSort.name(),
            Algorithm::Quick => QuickSort.name(),
            Algorithm::Merge => MergeSort.name(),
        }
    }

    fn sort_with<T, K, O>(
        &self,
        data: &mut [T],
        tracker: &mut ComparisonTracker,
        key: &K,
        direction: Direction,
        observer: &mut O,
    ) where
        T: Clone,
        K: OrderingKey<T> + ?Sized,
        O: StepObserver<T> + ?Sized,
    {
        match self {
            Algorithm::Bubble => BubbleSort.sort_with(data, tracker, key, direction, observer),
            Algorithm::Insertion => {
                InsertionSort.sort_with(data, tracker, key, direction, observer)
            }
            Algorithm::Selection => {
                SelectionSort.sort_with(data, tracker, key, direction, observer)
            }
            Algorithm::Quick => QuickSort.sort_with(data, tracker, key, direction, observer),
            Algorithm::Merge => MergeSort.sort_with(data, tracker, key, direction, observer),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortBenchError;

    /// Accepts "Quick Sort", "quick", "quick-sort" or "quick_sort", any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        let short = normalized.strip_suffix(" sort").unwrap_or(&normalized).trim();
        match short {
            "bubble" => Ok(Algorithm::Bubble),
            "insertion" => Ok(Algorithm::Insertion),
            "selection" => Ok(Algorithm::Selection),
            "quick" => Ok(Algorithm::Quick),
            "merge" => Ok(Algorithm::Merge),
            _ => Err(SortBenchError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Display name to strategy, for lookup by a caller-chosen name
pub fn registry() -> HashMap<&'static str, Algorithm> {
    Algorithm::ALL.iter().map(|&algorithm| (algorithm.name(), algorithm)).collect()
}
