//! Quadratic comparison sorts with instrumentation.
//!
//! Each sort copies its input and reports how much work it did. `comparisons`
//! counts comparator calls; `swaps` counts exchanges (bubble, selection) or
//! element shifts (insertion).
//!
//! ### Performance Characteristics
//! | Sort | Best | Average | Worst | Stable |
//! |------|------|---------|-------|--------|
//! | bubble | \(O(n)\) | \(O(n^2)\) | \(O(n^2)\) | yes |
//! | selection | \(O(n^2)\) | \(O(n^2)\) | \(O(n^2)\) | no |
//! | insertion | \(O(n)\) | \(O(n^2)\) | \(O(n^2)\) | yes |

use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Output of an instrumented sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortReport<T> {
    /// The sorted copy of the input.
    pub sorted: Vec<T>,
    /// Number of comparator calls.
    ///
    /// Only real calls are counted. Insertion sort in particular adds nothing
    /// when a shift run reaches the front, so its total can be lower than a
    /// tally that charges one failing comparison per element.
    pub comparisons: u64,
    /// Swaps (bubble, selection) or shifts (insertion).
    pub swaps: u64,
}

/// Bubble sort with early exit after a pass without swaps.
///
/// ```
/// let report = arbor::sort::bubble_sort(&[3, 1, 2]);
/// assert_eq!(report.sorted, [1, 2, 3]);
/// assert_eq!(report.swaps, 2);
/// ```
pub fn bubble_sort<T: Ord + Clone>(data: &[T]) -> SortReport<T> {
    bubble_sort_by(data, T::cmp)
}

/// [`bubble_sort`] with a custom comparator.
pub fn bubble_sort_by<T, F>(data: &[T], mut compare: F) -> SortReport<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut sorted = data.to_vec();
    let (mut comparisons, mut swaps) = (0, 0);
    let n = sorted.len();

    for pass in 0..n {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            comparisons += 1;
            if compare(&sorted[j], &sorted[j + 1]) == Ordering::Greater {
                sorted.swap(j, j + 1);
                swaps += 1;
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    SortReport {
        sorted,
        comparisons,
        swaps,
    }
}

/// Selection sort; swaps only when the minimum is not already in place.
pub fn selection_sort<T: Ord + Clone>(data: &[T]) -> SortReport<T> {
    selection_sort_by(data, T::cmp)
}

/// [`selection_sort`] with a custom comparator.
pub fn selection_sort_by<T, F>(data: &[T], mut compare: F) -> SortReport<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut sorted = data.to_vec();
    let (mut comparisons, mut swaps) = (0, 0);
    let n = sorted.len();

    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            comparisons += 1;
            if compare(&sorted[j], &sorted[min]) == Ordering::Less {
                min = j;
            }
        }
        if min != i {
            sorted.swap(i, min);
            swaps += 1;
        }
    }

    SortReport {
        sorted,
        comparisons,
        swaps,
    }
}

/// Insertion sort by shifting larger elements of the sorted prefix right.
pub fn insertion_sort<T: Ord + Clone>(data: &[T]) -> SortReport<T> {
    insertion_sort_by(data, T::cmp)
}

/// [`insertion_sort`] with a custom comparator.
///
/// `swaps` counts shifts; the comparison that stops a shift run is counted
/// too.
pub fn insertion_sort_by<T, F>(data: &[T], mut compare: F) -> SortReport<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut sorted = data.to_vec();
    let (mut comparisons, mut shifts) = (0, 0);

    for i in 1..sorted.len() {
        let mut j = i;
        while j > 0 {
            comparisons += 1;
            if compare(&sorted[j - 1], &sorted[j]) != Ordering::Greater {
                break;
            }
            // Moving the key down one slot is one shift of its neighbour up.
            sorted.swap(j - 1, j);
            shifts += 1;
            j -= 1;
        }
    }

    SortReport {
        sorted,
        comparisons,
        swaps: shifts,
    }
}
