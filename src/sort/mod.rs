//! Comparison and non-comparison sorts.
//!
//! Every sort copies its input; none mutates the caller's slice. The
//! quadratic sorts return a [`SortReport`] with comparison and swap counts,
//! the others return the sorted `Vec`. Each comparison sort has a `_by`
//! variant taking a comparator, which is how [`bench`] counts comparisons.
//!
//! Stable: bubble, insertion, merge, counting, platform.
//! Not stable: selection, quick.

pub mod bench;
mod comparison;
pub mod counting;
mod divide;

pub use comparison::{
    bubble_sort, bubble_sort_by, insertion_sort, insertion_sort_by, selection_sort,
    selection_sort_by, SortReport,
};
pub use counting::{counting_sort, counting_sort_by_key, counting_sort_with_limit};
pub use divide::{merge_sort, merge_sort_by, quick_sort, quick_sort_by};

/// Baseline: the standard library's stable sort on a copy.
pub fn platform_sort<T: Ord + Clone>(data: &[T]) -> Vec<T> {
    let mut sorted = data.to_vec();
    sorted.sort();
    sorted
}

/// Returns `true` if `data` is in non-descending order.
pub fn is_sorted<T: PartialOrd>(data: &[T]) -> bool {
    data.windows(2).all(|pair| pair[0] <= pair[1])
}
