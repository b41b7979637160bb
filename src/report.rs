//! Side-by-side results of several algorithms over one dataset.
//!
//! This is the data a chart or heatmap front end consumes: per-algorithm
//! averages in run order, the fastest entry, and a metric matrix.

use std::fmt;

use serde::Serialize;

use crate::dataset::Shape;
use crate::harness::BenchmarkResult;
use crate::order::Direction;

/// Column labels of [`ComparisonReport::metric_matrix`]
pub const METRIC_LABELS: [&str; 3] = ["Time", "Memory", "Comparisons"];

/// Results for several algorithms over the same dataset
#[derive(Clone, Debug, Serialize)]
pub struct ComparisonReport {
    pub shape: Shape,
    pub size: usize,
    pub direction: Direction,
    pub results: Vec<BenchmarkResult<()>>,
}

impl ComparisonReport {
    pub fn new(shape: Shape, size: usize, direction: Direction) -> Self {
        Self { shape, size, direction, results: Vec::new() }
    }

    /// Record an algorithm's result, discarding its sorted output
    pub fn push<T>(&mut self, result: &BenchmarkResult<T>) {
        self.results.push(result.summary());
    }

    /// The entry with the lowest average time; first wins on ties
    pub fn fastest(&self) -> Option<&BenchmarkResult<()>> {
        self.results.iter().fold(None, |best: Option<&BenchmarkResult<()>>, result| match best {
            Some(b) if b.avg_time <= result.avg_time => Some(b),
            _ => Some(result),
        })
    }

    /// Rows of `[avg_time, avg_memory, avg_comparisons]`, one per result
    pub fn metric_matrix(&self) -> Vec<[f64; 3]> {
        self.results
            .iter()
            .map(|result| [result.avg_time, result.avg_memory as f64, result.avg_comparisons])
            .collect()
    }

    /// Row labels matching [`ComparisonReport::metric_matrix`]
    pub fn algorithm_names(&self) -> Vec<&str> {
        self.results.iter().map(|result| result.algorithm.as_str()).collect()
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dataset: {} | Size: {} | Order: {:?}", self.shape, self.size, self.direction)?;
        let [time, memory, comparisons] = METRIC_LABELS;
        for result in &self.results {
            writeln!(f)?;
            writeln!(f, "{}", result.algorithm)?;
            writeln!(f, "  {time}: {:.6} sec", result.avg_time)?;
            writeln!(f, "  {memory}: {} bytes", result.avg_memory)?;
            writeln!(f, "  {comparisons}: {}", result.avg_comparisons)?;
        }
        if let Some(best) = self.fastest() {
            writeln!(f)?;
            writeln!(f, "Best Algorithm (Fastest): {}", best.algorithm)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(
        name: &str,
        avg_time: f64,
        avg_memory: u64,
        avg_comparisons: f64,
    ) -> BenchmarkResult<()> {
        BenchmarkResult {
            algorithm: name.to_string(),
            runs: 1,
            sorted_data: Vec::new(),
            avg_time,
            avg_memory,
            avg_comparisons,
            run_stats: Vec::new(),
        }
    }

    fn report() -> ComparisonReport {
        let mut report = ComparisonReport::new(Shape::Random, 100, Direction::Ascending);
        report.push(&result("Bubble Sort", 0.5, 424, 4950.0));
        report.push(&result("Quick Sort", 0.01, 424, 640.0));
        report.push(&result("Merge Sort", 0.01, 424, 540.0));
        report
    }

    #[test]
    fn test_fastest_prefers_first_on_tie() {
        assert_eq!(report().fastest().map(|r| r.algorithm.as_str()), Some("Quick Sort"));
        assert!(ComparisonReport::new(Shape::Sorted, 0, Direction::Ascending).fastest().is_none());
    }

    #[test]
    fn test_metric_matrix() {
        let report = report();
        assert_eq!(report.algorithm_names(), vec!["Bubble Sort", "Quick Sort", "Merge Sort"]);
        assert_eq!(report.metric_matrix()[0], [0.5, 424.0, 4950.0]);
        assert_eq!(report.metric_matrix().len(), 3);

        // Columns line up with their labels in the text summary
        let text = report.to_string();
        for (label, value) in METRIC_LABELS.iter().zip(["0.500000 sec", "424 bytes", "4950"]) {
            assert!(text.contains(&format!("  {label}: {value}")), "missing {label}");
        }
    }

    #[test]
    fn test_display() {
        let text = report().to_string();
        assert!(text.starts_with("Dataset: Random | Size: 100"));
        assert!(text.contains("  Time: 0.500000 sec"));
        assert!(text.contains("  Comparisons: 4950"));
        assert!(text.ends_with("Best Algorithm (Fastest): Quick Sort\n"));
    }
}
