//! Divide-and-conquer sorts.

use core::cmp::Ordering;

/// Stable top-down merge sort. \(O(n \log n)\) time, \(O(n)\) extra space.
pub fn merge_sort<T: Ord + Clone>(data: &[T]) -> Vec<T> {
    merge_sort_by(data, T::cmp)
}

/// [`merge_sort`] with a custom comparator.
pub fn merge_sort_by<T, F>(data: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sorted(data, &mut compare)
}

fn merge_sorted<T: Clone, F: FnMut(&T, &T) -> Ordering>(data: &[T], compare: &mut F) -> Vec<T> {
    if data.len() <= 1 {
        return data.to_vec();
    }
    let (left, right) = data.split_at(data.len() / 2);
    let left = merge_sorted(left, compare);
    let right = merge_sorted(right, compare);
    merge(left, right, compare)
}

/// Takes from the left run on ties, which keeps the sort stable.
fn merge<T, F: FnMut(&T, &T) -> Ordering>(left: Vec<T>, right: Vec<T>, compare: &mut F) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(l, r) == Ordering::Greater,
            _ => break,
        };
        merged.extend(if take_right { right.next() } else { left.next() });
    }
    merged.extend(left);
    merged.extend(right);
    merged
}

/// Quick sort with a median-of-three pivot and a three-way partition.
///
/// Average \(O(n \log n)\); adversarial inputs can still force \(O(n^2)\).
/// Not stable.
pub fn quick_sort<T: Ord + Clone>(data: &[T]) -> Vec<T> {
    quick_sort_by(data, T::cmp)
}

/// [`quick_sort`] with a custom comparator.
pub fn quick_sort_by<T, F>(data: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    quick_sorted(data.to_vec(), &mut compare)
}

fn quick_sorted<T: Clone, F: FnMut(&T, &T) -> Ordering>(data: Vec<T>, compare: &mut F) -> Vec<T> {
    if data.len() <= 1 {
        return data;
    }
    let pivot = median_of_three(&data, compare);

    let (mut less, mut equal, mut greater) = (Vec::new(), Vec::new(), Vec::new());
    for item in data {
        match compare(&item, &pivot) {
            Ordering::Less => less.push(item),
            Ordering::Equal => equal.push(item),
            Ordering::Greater => greater.push(item),
        }
    }

    let mut sorted = quick_sorted(less, compare);
    sorted.append(&mut equal);
    sorted.append(&mut quick_sorted(greater, compare));
    sorted
}

/// Median of the first, middle and last elements. `data` must be non-empty.
fn median_of_three<T: Clone, F: FnMut(&T, &T) -> Ordering>(data: &[T], compare: &mut F) -> T {
    let (a, b, c) = (&data[0], &data[data.len() / 2], &data[data.len() - 1]);
    let median = if compare(a, b) == Ordering::Greater {
        // b < a
        if compare(b, c) != Ordering::Less {
            b
        } else if compare(a, c) == Ordering::Greater {
            c
        } else {
            a
        }
    } else if compare(b, c) != Ordering::Greater {
        b
    } else if compare(a, c) == Ordering::Greater {
        a
    } else {
        c
    };
    median.clone()
}
