use super::Probe;
use crate::observer::StepObserver;
use crate::order::{Direction, OrderingKey};
use crate::tracker::ComparisonTracker;
use crate::Sorter;

/// Quicksort with a Lomuto partition around the last element of each range.
///
/// No pivot randomization: sorted and reverse-sorted inputs take O(n²).
/// Ranges are visited left before right, exactly as the recursive
/// formulation would, but pending ranges live on a heap-allocated stack.
#[derive(Clone, Copy, Debug, Default)]
pub struct QuickSort;

impl Sorter for QuickSort {
    fn name(&self) -> &'static str {
        "Quick Sort"
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
        quick_sort(data, &mut Probe::new(tracker, key, direction, observer));
    }
}

fn quick_sort<T, K, O>(data: &mut [T], probe: &mut Probe<'_, K, O>)
where
    T: Clone,
    K: OrderingKey<T> + ?Sized,
    O: StepObserver<T> + ?Sized,
{
    // Half-open ranges still to be partitioned
    let mut pending = vec![(0, data.len())];

    while let Some((lo, hi)) = pending.pop() {
        if hi - lo < 2 {
            continue;
        }

        let pivot = partition(data, lo, hi, probe);
        pending.push((pivot + 1, hi));
        pending.push((lo, pivot));
    }
}

/// Partition `data[lo..hi]` around `data[hi - 1]`; returns the pivot's final index
fn partition<T, K, O>(data: &mut [T], lo: usize, hi: usize, probe: &mut Probe<'_, K, O>) -> usize
where
    T: Clone,
    K: OrderingKey<T> + ?Sized,
    O: StepObserver<T> + ?Sized,
{
    let pivot = hi - 1;
    let mut store = lo;

    for j in lo..pivot {
        if probe.precedes(&data[j], &data[pivot]) {
            data.swap(store, j);
            store += 1;
            probe.step(data);
        }
    }

    data.swap(store, pivot);
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::StepRecorder;
    use crate::order::IDENTITY;

    #[test]
    fn test_lomuto_trace() {
        // Range [0, 4) pivot 1: 3 comparisons, no swaps -> [1, 3, 8, 5]
        // Range [1, 4) pivot 5: 2 comparisons, 3 is swapped with itself -> [1, 3, 5, 8]
        let mut data = vec![5, 3, 8, 1];
        let mut tracker = ComparisonTracker::new();
        let mut recorder = StepRecorder::new();
        QuickSort.sort_with(
            &mut data,
            &mut tracker,
            &IDENTITY,
            Direction::Ascending,
            &mut recorder,
        );

        assert_eq!(data, vec![1, 3, 5, 8]);
        assert_eq!(tracker.comparisons(), 5);
        assert_eq!(recorder.frames(), &[vec![1, 3, 8, 5]]);
    }

    #[test]
    fn test_reverse_sorted_is_quadratic() {
        let mut data: Vec<i32> = (0..100).rev().collect();
        let mut tracker = ComparisonTracker::new();
        QuickSort.sort(&mut data, &mut tracker);

        assert_eq!(data, (0..100).collect::<Vec<_>>());
        assert_eq!(tracker.comparisons(), 99 * 100 / 2);
    }

    #[test]
    fn test_large_sorted_input_does_not_overflow_stack() {
        let mut data: Vec<i32> = (0..5_000).collect();
        let mut tracker = ComparisonTracker::new();
        QuickSort.sort(&mut data, &mut tracker);
        assert_eq!(tracker.comparisons(), 4_999 * 5_000 / 2);
    }
}
