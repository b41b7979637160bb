//! Benchmark harness: repeated runs of one algorithm over one dataset.
//!
//! Each run gets a fresh tracker and its own copy of the input, is timed with
//! a monotonic clock, and contributes its elapsed time, the deep footprint of
//! its sorted output, and its comparison count to the averages. Nothing is
//! retried or caught: a panic inside a key function or observer ends the
//! whole benchmark.

use std::num::NonZeroUsize;
use std::time::Instant;

use log::{debug, info};
use serde::Serialize;

use crate::footprint::deep_size_of;
use crate::footprint::DeepSize;
use crate::observer::{NoObserver, StepObserver};
use crate::order::{Direction, Identity, OrderingKey, IDENTITY};
use crate::tracker::ComparisonTracker;
use crate::Sorter;

/// Measurements from a single run
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RunStats {
    /// Wall-clock seconds spent inside the sort call
    pub elapsed: f64,
    /// Deep footprint of the sorted output in bytes
    pub memory: u64,
    pub comparisons: u64,
}

/// Aggregated outcome of one harness invocation
#[derive(Clone, Debug, Serialize)]
pub struct BenchmarkResult<T> {
    pub algorithm: String,
    pub runs: usize,
    /// Output of the final run
    pub sorted_data: Vec<T>,
    /// Mean seconds per run
    pub avg_time: f64,
    /// Mean footprint in bytes (integer mean)
    pub avg_memory: u64,
    pub avg_comparisons: f64,
    pub run_stats: Vec<RunStats>,
}

impl<T> BenchmarkResult<T> {
    pub fn total_comparisons(&self) -> u64 {
        self.run_stats.iter().map(|stats| stats.comparisons).sum()
    }

    /// Drop the sorted output, keeping only the metrics
    pub fn summary(&self) -> BenchmarkResult<()> {
        BenchmarkResult {
            algorithm: self.algorithm.clone(),
            runs: self.runs,
            sorted_data: Vec::new(),
            avg_time: self.avg_time,
            avg_memory: self.avg_memory,
            avg_comparisons: self.avg_comparisons,
            run_stats: self.run_stats.clone(),
        }
    }
}

/// Harness configuration.
///
/// ```
/// use sort_bench::{Algorithm, Benchmark, Direction};
/// use std::num::NonZeroUsize;
///
/// let data = vec![5, 3, 8, 1];
/// let result = Benchmark::new()
///     .runs(NonZeroUsize::new(3).unwrap())
///     .direction(Direction::Descending)
///     .run(&Algorithm::Quick, &data);
/// assert_eq!(result.sorted_data, vec![8, 5, 3, 1]);
/// ```
#[derive(Clone, Debug)]
pub struct Benchmark<K = Identity> {
    key: K,
    direction: Direction,
    runs: NonZeroUsize,
}

impl Benchmark<Identity> {
    pub fn new() -> Self {
        Self { key: IDENTITY, direction: Direction::Ascending, runs: NonZeroUsize::MIN }
    }
}

impl Default for Benchmark<Identity> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Benchmark<K> {
    pub fn runs(mut self, runs: NonZeroUsize) -> Self {
        self.runs = runs;
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Replace the ordering key
    pub fn key<K2>(self, key: K2) -> Benchmark<K2> {
        Benchmark { key, direction: self.direction, runs: self.runs }
    }

    /// Benchmark `sorter` over `data` without observing steps
    pub fn run<S, T>(&self, sorter: &S, data: &[T]) -> BenchmarkResult<T>
    where
        S: Sorter,
        T: Clone + DeepSize,
        K: OrderingKey<T>,
    {
        self.run_observed(sorter, data, &mut NoObserver)
    }

    /// Benchmark `sorter` over `data`, reporting every step of every run to
    /// `observer`. The observer's time is included in the measured time.
    pub fn run_observed<S, T, O>(
        &self,
        sorter: &S,
        data: &[T],
        observer: &mut O,
    ) -> BenchmarkResult<T>
    where
        S: Sorter,
        T: Clone + DeepSize,
        K: OrderingKey<T>,
        O: StepObserver<T> + ?Sized,
    {
        let runs = self.runs.get();
        let mut run_stats = Vec::with_capacity(runs);
        let mut sorted_data = Vec::new();

        for run in 1..=runs {
            let mut tracker = ComparisonTracker::new();
            let mut working = data.to_vec();

            let start = Instant::now();
            sorter.sort_with(&mut working, &mut tracker, &self.key, self.direction, &mut *observer);
            let elapsed = start.elapsed().as_secs_f64();

            let stats = RunStats {
                elapsed,
                memory: deep_size_of(&working) as u64,
                comparisons: tracker.comparisons(),
            };
            debug!(
                "{} run {run}/{runs}: {:.6}s, {} bytes, {} comparisons",
                sorter.name(),
                stats.elapsed,
                stats.memory,
                stats.comparisons
            );
            run_stats.push(stats);
            sorted_data = working;
        }

        let total_time: f64 = run_stats.iter().map(|stats| stats.elapsed).sum();
        let total_memory: u64 = run_stats.iter().map(|stats| stats.memory).sum();
        let total_comparisons: u64 = run_stats.iter().map(|stats| stats.comparisons).sum();

        let result = BenchmarkResult {
            algorithm: sorter.name().to_string(),
            runs,
            sorted_data,
            avg_time: total_time / runs as f64,
            avg_memory: total_memory / runs as u64,
            avg_comparisons: total_comparisons as f64 / runs as f64,
            run_stats,
        };
        info!(
            "{}: {} elements x {} runs, avg {:.6}s, {} bytes, {} comparisons",
            result.algorithm,
            data.len(),
            runs,
            result.avg_time,
            result.avg_memory,
            result.avg_comparisons
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Algorithm;
    use crate::observer::StepRecorder;
    use crate::records::Person;

    fn three() -> NonZeroUsize {
        NonZeroUsize::new(3).unwrap()
    }

    #[test]
    fn test_averages_over_runs() {
        let data = vec![9, 4, 7, 1, 8, 2];
        let result = Benchmark::new().runs(three()).run(&Algorithm::Selection, &data);

        assert_eq!(result.runs, 3);
        assert_eq!(result.run_stats.len(), 3);
        assert_eq!(result.sorted_data, vec![1, 2, 4, 7, 8, 9]);
        assert_eq!(result.total_comparisons(), 3 * 15);
        assert_eq!(result.avg_comparisons, 15.0);
        assert!(result.avg_time >= 0.0);
    }

    #[test]
    fn test_memory_is_footprint_of_output() {
        let data: Vec<i64> = (0..64).rev().collect();
        let result = Benchmark::new().run(&Algorithm::Merge, &data);
        assert_eq!(result.avg_memory, deep_size_of(&result.sorted_data) as u64);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let data = vec![3, 1, 2];
        let result = Benchmark::new().runs(three()).run(&Algorithm::Bubble, &data);
        assert_eq!(data, vec![3, 1, 2]);
        assert_eq!(result.sorted_data, vec![1, 2, 3]);
    }

    #[test]
    fn test_observer_sees_every_run() {
        let data = vec![2, 1];
        let mut recorder = StepRecorder::new();
        Benchmark::new().runs(three()).run_observed(&Algorithm::Insertion, &data, &mut recorder);
        assert_eq!(recorder.frames(), &[vec![1, 2], vec![1, 2], vec![1, 2]]);
    }

    #[test]
    fn test_key_and_direction() {
        let people = vec![
            Person::new("Ada", 36, 3.5),
            Person::new("Grace", 45, 4.0),
            Person::new("Alan", 41, 3.9),
        ];
        let result = Benchmark::new()
            .direction(Direction::Descending)
            .key(|p: &Person| p.age)
            .run(&Algorithm::Merge, &people);

        let names: Vec<&str> = result.sorted_data.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Grace", "Alan", "Ada"]);
    }

    #[test]
    fn test_summary_drops_data() {
        let result = Benchmark::new().run(&Algorithm::Quick, &[3, 2, 1]);
        let summary = result.summary();
        assert!(summary.sorted_data.is_empty());
        assert_eq!(summary.avg_comparisons, result.avg_comparisons);
        assert_eq!(summary.algorithm, "Quick Sort");
    }
}
