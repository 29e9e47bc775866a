//! Counting sort for non-negative integers.
//!
//! Runs in \(O(n + k)\) time and \(O(k)\) space, where \(k\) is the largest
//! value. `k` is bounded by a limit so a single huge value cannot force a
//! huge allocation.

use num_traits::PrimInt;

use crate::{Error, Result};

/// Largest value [`counting_sort`] accepts.
pub const DEFAULT_VALUE_LIMIT: usize = 1 << 20;

/// Sorts non-negative integers no larger than [`DEFAULT_VALUE_LIMIT`].
///
/// # Errors
///
/// [`Error::NegativeValue`] or [`Error::ValueTooLarge`] if an element is out
/// of range.
///
/// ```
/// use arbor::sort::counting_sort;
///
/// assert_eq!(counting_sort(&[4u32, 1, 3, 1]).unwrap(), [1, 1, 3, 4]);
/// assert!(counting_sort(&[3i32, -1]).is_err());
/// ```
pub fn counting_sort<T: PrimInt>(data: &[T]) -> Result<Vec<T>> {
    counting_sort_with_limit(data, DEFAULT_VALUE_LIMIT)
}

/// [`counting_sort`] with an explicit bound on the largest value.
///
/// # Errors
///
/// As for [`counting_sort`], against `limit`.
pub fn counting_sort_with_limit<T: PrimInt>(data: &[T], limit: usize) -> Result<Vec<T>> {
    let keys = data
        .iter()
        .map(|&value| bucket(value, limit))
        .collect::<Result<Vec<_>>>()?;
    let Some(&max) = keys.iter().max() else {
        return Ok(Vec::new());
    };

    let mut counts = vec![0usize; max + 1];
    for &key in &keys {
        counts[key] += 1;
    }

    let mut sorted = Vec::with_capacity(data.len());
    for (key, &count) in counts.iter().enumerate().filter(|&(_, &c)| c > 0) {
        let value = <T as num_traits::NumCast>::from(key)
            .ok_or(Error::ValueTooLarge { value: key, limit })?;
        sorted.extend(std::iter::repeat(value).take(count));
    }
    Ok(sorted)
}

/// Stable counting sort of arbitrary records by an integer key.
///
/// Records with equal keys keep their input order.
///
/// # Errors
///
/// As for [`counting_sort_with_limit`], applied to the keys.
pub fn counting_sort_by_key<T, K, F>(data: &[T], limit: usize, mut key: F) -> Result<Vec<T>>
where
    T: Clone,
    K: PrimInt,
    F: FnMut(&T) -> K,
{
    let keys = data
        .iter()
        .map(|item| bucket(key(item), limit))
        .collect::<Result<Vec<_>>>()?;
    let Some(&max) = keys.iter().max() else {
        return Ok(Vec::new());
    };

    // Exclusive prefix sums: starts[k] is the first output slot for key k.
    let mut starts = vec![0usize; max + 1];
    for &k in &keys {
        starts[k] += 1;
    }
    let mut total = 0;
    for slot in &mut starts {
        let count = *slot;
        *slot = total;
        total += count;
    }

    let mut placed: Vec<Option<T>> = vec![None; data.len()];
    for (item, &k) in data.iter().zip(&keys) {
        placed[starts[k]] = Some(item.clone());
        starts[k] += 1;
    }
    Ok(placed.into_iter().flatten().collect())
}

fn bucket<T: PrimInt>(value: T, limit: usize) -> Result<usize> {
    if value < T::zero() {
        return Err(Error::NegativeValue);
    }
    match value.to_usize() {
        Some(key) if key <= limit => Ok(key),
        key => Err(Error::ValueTooLarge {
            value: key.unwrap_or(usize::MAX),
            limit,
        }),
    }
}
