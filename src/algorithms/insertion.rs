use super::Probe;
use crate::observer::StepObserver;
use crate::order::{Direction, OrderingKey};
use crate::tracker::ComparisonTracker;
use crate::Sorter;

/// Insertion sort: walks each element leftward past strictly out-of-order
/// predecessors. Stable.
#[derive(Clone, Copy, Debug, Default)]
pub struct InsertionSort;

impl Sorter for InsertionSort {
    fn name(&self) -> &'static str {
        "Insertion Sort"
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
        insertion_sort(data, &mut Probe::new(tracker, key, direction, observer));
    }
}

fn insertion_sort<T, K, O>(data: &mut [T], probe: &mut Probe<'_, K, O>)
where
    T: Clone,
    K: OrderingKey<T> + ?Sized,
    O: StepObserver<T> + ?Sized,
{
    for i in 1..data.len() {
        let mut j = i;
        // The comparison that stops the shift is counted too
        while j > 0 && probe.precedes(&data[j], &data[j - 1]) {
            data.swap(j - 1, j);
            j -= 1;
            probe.step(data);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::StepRecorder;
    use crate::order::IDENTITY;

    #[test]
    fn test_sorted_input_is_linear() {
        let mut data: Vec<i32> = (0..50).collect();
        let mut tracker = ComparisonTracker::new();
        InsertionSort.sort(&mut data, &mut tracker);
        assert_eq!(tracker.comparisons(), 49);
    }

    #[test]
    fn test_counts_stopping_comparison() {
        // 1 is shifted past 3 (1 comparison, stops at the front);
        // 2 is shifted past 3 then stopped by 1 (2 comparisons)
        let mut data = vec![3, 1, 2];
        let mut tracker = ComparisonTracker::new();
        let mut recorder = StepRecorder::new();
        InsertionSort.sort_with(
            &mut data,
            &mut tracker,
            &IDENTITY,
            Direction::Ascending,
            &mut recorder,
        );

        assert_eq!(data, vec![1, 2, 3]);
        assert_eq!(tracker.comparisons(), 3);
        assert_eq!(recorder.frames(), &[vec![1, 3, 2], vec![1, 2, 3]]);
    }
}
