use super::Probe;
use crate::observer::StepObserver;
use crate::order::{Direction, OrderingKey};
use crate::tracker::ComparisonTracker;
use crate::Sorter;

/// Top-down merge sort. Stable: on equal keys the left head wins.
///
/// Each merge copies its two halves into fresh vectors and builds the merged
/// run in a third before writing it back. Observers see the whole array after
/// every placement: untouched prefix, merged run so far, both unconsumed
/// remainders, untouched suffix.
#[derive(Clone, Copy, Debug, Default)]
pub struct MergeSort;

impl Sorter for MergeSort {
    fn name(&self) -> &'static str {
        "Merge Sort"
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
        let len = data.len();
        merge_sort(data, 0, len, &mut Probe::new(tracker, key, direction, observer));
    }
}

fn merge_sort<T, K, O>(data: &mut [T], lo: usize, hi: usize, probe: &mut Probe<'_, K, O>)
where
    T: Clone,
    K: OrderingKey<T> + ?Sized,
    O: StepObserver<T> + ?Sized,
{
    if hi - lo <= 1 {
        return;
    }

    let mid = lo + (hi - lo) / 2;
    merge_sort(data, lo, mid, probe);
    merge_sort(data, mid, hi, probe);
    merge(data, lo, mid, hi, probe);
}

fn merge<T, K, O>(data: &mut [T], lo: usize, mid: usize, hi: usize, probe: &mut Probe<'_, K, O>)
where
    T: Clone,
    K: OrderingKey<T> + ?Sized,
    O: StepObserver<T> + ?Sized,
{
    let left = data[lo..mid].to_vec();
    let right = data[mid..hi].to_vec();
    let mut merged = Vec::with_capacity(hi - lo);
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if probe.precedes(&right[j], &left[i]) {
            merged.push(right[j].clone());
            j += 1;
        } else {
            merged.push(left[i].clone());
            i += 1;
        }

        probe.step_with(|| {
            let mut frame = Vec::with_capacity(data.len());
            frame.extend_from_slice(&data[..lo]);
            frame.extend_from_slice(&merged);
            frame.extend_from_slice(&left[i..]);
            frame.extend_from_slice(&right[j..]);
            frame.extend_from_slice(&data[hi..]);
            frame
        });
    }

    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    data[lo..hi].clone_from_slice(&merged);
}
