//! Sorting Algorithm Benchmark
//!
//! Instrumented bubble, insertion, selection, quick and merge sorts behind one
//! `Sorter` contract, plus a harness that times them, counts their
//! comparisons and measures the footprint of their output.

pub mod algorithms;
pub mod dataset;
pub mod errors;
pub mod footprint;
pub mod guard;
pub mod harness;
pub mod observer;
pub mod order;
pub mod records;
pub mod report;
pub mod tracker;

pub use algorithms::{
    registry, Algorithm, BubbleSort, InsertionSort, MergeSort, QuickSort, SelectionSort,
};
pub use dataset::{create_rng, generate_dataset, Shape};
pub use errors::{Result, SortBenchError};
pub use footprint::{deep_size_of, DeepSize, Sizer};
pub use guard::{RunGuard, RunTicket};
pub use harness::{Benchmark, BenchmarkResult, RunStats};
pub use observer::{NoObserver, StepObserver, StepRecorder};
pub use order::{Direction, Identity, OrderingKey, IDENTITY};
pub use records::Person;
pub use report::ComparisonReport;
pub use tracker::ComparisonTracker;

/// Largest dataset the command-line front end accepts
pub const MAX_DATASET_SIZE: usize = 200_000;

/// Trait for instrumented sorting implementations
pub trait Sorter {
    /// Display name, e.g. "Quick Sort"
    fn name(&self) -> &'static str;

    /// Sort `data` in place under `key` and `direction`.
    ///
    /// Every pairwise ordering decision is recorded on `tracker`, and
    /// `observer` receives a copy of the whole array after each qualifying
    /// mutation.
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
        O: StepObserver<T> + ?Sized;

    /// Sort ascending by the elements' own order, without observing steps
    fn sort<T: Ord + Clone>(&self, data: &mut [T], tracker: &mut ComparisonTracker) {
        self.sort_with(data, tracker, &IDENTITY, Direction::Ascending, &mut NoObserver);
    }
}

/// Check a dataset size against the accepted `1..=MAX_DATASET_SIZE` range
pub fn validate_dataset_size(size: usize) -> Result<usize> {
    if (1..=MAX_DATASET_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(SortBenchError::InvalidDatasetSize { size, max: MAX_DATASET_SIZE })
    }
}
