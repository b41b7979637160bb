use super::Probe;
use crate::observer::StepObserver;
use crate::order::{Direction, OrderingKey};
use crate::tracker::ComparisonTracker;
use crate::Sorter;

/// Selection sort: one swap per outer pass, after scanning the suffix for
/// its extremum. Not stable.
#[derive(Clone, Copy, Debug, Default)]
pub struct SelectionSort;

impl Sorter for SelectionSort {
    fn name(&self) -> &'static str {
        "Selection Sort"
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
        selection_sort(data, &mut Probe::new(tracker, key, direction, observer));
    }
}

fn selection_sort<T, K, O>(data: &mut [T], probe: &mut Probe<'_, K, O>)
where
    T: Clone,
    K: OrderingKey<T> + ?Sized,
    O: StepObserver<T> + ?Sized,
{
    let n = data.len();

    for i in 0..n {
        let mut selected = i;
        for j in i + 1..n {
            if probe.precedes(&data[j], &data[selected]) {
                selected = j;
            }
        }

        // Every pass reports a step, even when the extremum is already in place
        data.swap(i, selected);
        probe.step(data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::StepRecorder;
    use crate::order::IDENTITY;

    #[test]
    fn test_one_frame_per_pass() {
        let mut data = vec![2, 3, 1];
        let mut tracker = ComparisonTracker::new();
        let mut recorder = StepRecorder::new();
        SelectionSort.sort_with(
            &mut data,
            &mut tracker,
            &IDENTITY,
            Direction::Ascending,
            &mut recorder,
        );

        assert_eq!(data, vec![1, 2, 3]);
        assert_eq!(tracker.comparisons(), 3);
        assert_eq!(recorder.frames(), &[vec![1, 3, 2], vec![1, 2, 3], vec![1, 2, 3]]);
    }

    #[test]
    fn test_descending() {
        let mut data = vec![4, 9, 1, 7];
        let mut tracker = ComparisonTracker::new();
        SelectionSort.sort_with(
            &mut data,
            &mut tracker,
            &IDENTITY,
            Direction::Descending,
            &mut crate::NoObserver,
        );
        assert_eq!(data, vec![9, 7, 4, 1]);
        assert_eq!(tracker.comparisons(), 6);
    }
}
