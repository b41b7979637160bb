use super::Probe;
use crate::observer::StepObserver;
use crate::order::{Direction, OrderingKey};
use crate::tracker::ComparisonTracker;
use crate::Sorter;

/// Classic O(n²) bubble sort.
///
/// Sweeps every adjacent pair with a shrinking upper bound and no early exit,
/// so it always makes n(n-1)/2 comparisons. Swaps only on strict violations.
#[derive(Clone, Copy, Debug, Default)]
pub struct BubbleSort;

impl Sorter for BubbleSort {
    fn name(&self) -> &'static str {
        "Bubble Sort"
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
        bubble_sort(data, &mut Probe::new(tracker, key, direction, observer));
    }
}

fn bubble_sort<T, K, O>(data: &mut [T], probe: &mut Probe<'_, K, O>)
where
    T: Clone,
    K: OrderingKey<T> + ?Sized,
    O: StepObserver<T> + ?Sized,
{
    let n = data.len();

    for i in 0..n {
        for j in 0..n - i - 1 {
            if probe.precedes(&data[j + 1], &data[j]) {
                data.swap(j, j + 1);
                probe.step(data);
            }
        }
    }
}
