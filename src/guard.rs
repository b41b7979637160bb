//! Single-active-benchmark guard.
//!
//! The core itself holds no locks. A host that may trigger benchmarks
//! concurrently (for example from a UI and a worker thread) shares one
//! [`RunGuard`] and only starts a run while holding its ticket.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::errors::{Result, SortBenchError};

/// Flag that admits one benchmark at a time.
///
/// ```
/// use std::sync::Arc;
/// use std::thread;
/// use sort_bench::{Algorithm, Benchmark, RunGuard, SortBenchError};
///
/// let guard = Arc::new(RunGuard::new());
/// let ticket = guard.try_acquire().unwrap();
///
/// // A second trigger while the first run is in flight is refused
/// let other = Arc::clone(&guard);
/// let refused = thread::spawn(move || {
///     let outcome = other.try_acquire().map(|_| ());
///     outcome
/// })
/// .join()
/// .unwrap();
/// assert_eq!(refused, Err(SortBenchError::BenchmarkRunning));
///
/// let result = Benchmark::new().run(&Algorithm::Merge, &[3, 1, 2][..]);
/// drop(ticket);
/// assert_eq!(result.sorted_data, vec![1, 2, 3]);
/// assert!(guard.try_acquire().is_ok());
/// ```
#[derive(Debug, Default)]
pub struct RunGuard {
    running: AtomicBool,
}

/// Proof that the holder owns the guard; releases it on drop
#[derive(Debug)]
pub struct RunTicket<'a> {
    guard: &'a RunGuard,
}

impl RunGuard {
    pub const fn new() -> Self {
        Self { running: AtomicBool::new(false) }
    }

    /// Claim the guard, failing if a benchmark is already running
    pub fn try_acquire(&self) -> Result<RunTicket<'_>> {
        self.running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| RunTicket { guard: self })
            .map_err(|_| SortBenchError::BenchmarkRunning)
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }
}

impl Drop for RunTicket<'_> {
    fn drop(&mut self) {
        self.guard.running.store(false, Ordering::Release);
    }
}
