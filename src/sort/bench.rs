//! Instrumented benchmark runner for the sort suite.
//!
//! [`measure`] times one algorithm on one input with [`Instant`] and counts
//! comparator calls through a wrapping closure. [`run`] applies a
//! [`BenchConfig`] to an input. Results are plain serde records so callers can
//! write them out as JSON.

use core::cmp::Ordering;
use core::fmt;
use std::time::{Duration, Instant};

use num_traits::PrimInt;
use serde::{Deserialize, Serialize};

use super::{
    bubble_sort_by, counting_sort, insertion_sort_by, is_sorted, merge_sort_by, quick_sort_by,
    selection_sort_by,
};
use crate::trace::debug_event;
use crate::Result;

/// Algorithms known to the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Adjacent-swap passes with early exit.
    Bubble,
    /// Minimum selection.
    Selection,
    /// Shift-based insertion.
    Insertion,
    /// Top-down merge sort.
    Merge,
    /// Median-of-three quick sort.
    Quick,
    /// Counting sort (non-negative integers only).
    Counting,
    /// The standard library's stable sort, as a baseline.
    Platform,
}

/// Asymptotic profile of an algorithm, as rendered in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Complexity {
    /// Best-case time.
    pub best: &'static str,
    /// Average-case time.
    pub average: &'static str,
    /// Worst-case time.
    pub worst: &'static str,
    /// Auxiliary space.
    pub space: &'static str,
    /// Whether equal elements keep their input order.
    pub stable: bool,
}

impl Algorithm {
    /// Every algorithm, in report order.
    pub const ALL: [Self; 7] = [
        Self::Bubble,
        Self::Selection,
        Self::Insertion,
        Self::Merge,
        Self::Quick,
        Self::Counting,
        Self::Platform,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble",
            Self::Selection => "Selection",
            Self::Insertion => "Insertion",
            Self::Merge => "Merge",
            Self::Quick => "Quick",
            Self::Counting => "Counting",
            Self::Platform => "Platform",
        }
    }

    /// Whether the average case is \(O(n^2)\).
    pub fn is_quadratic(self) -> bool {
        matches!(self, Self::Bubble | Self::Selection | Self::Insertion)
    }

    /// Whether the algorithm reports swaps or shifts.
    pub fn counts_swaps(self) -> bool {
        self.is_quadratic()
    }

    /// Static complexity table entry.
    pub fn complexity(self) -> Complexity {
        const fn row(
            best: &'static str,
            average: &'static str,
            worst: &'static str,
            space: &'static str,
            stable: bool,
        ) -> Complexity {
            Complexity {
                best,
                average,
                worst,
                space,
                stable,
            }
        }
        match self {
            Self::Bubble => row("O(n)", "O(n²)", "O(n²)", "O(1)", true),
            Self::Selection => row("O(n²)", "O(n²)", "O(n²)", "O(1)", false),
            Self::Insertion => row("O(n)", "O(n²)", "O(n²)", "O(1)", true),
            Self::Merge => row("O(n lg n)", "O(n lg n)", "O(n lg n)", "O(n)", true),
            Self::Quick => row("O(n lg n)", "O(n lg n)", "O(n²)", "O(lg n)", false),
            Self::Counting => row("O(n+k)", "O(n+k)", "O(n+k)", "O(k)", true),
            Self::Platform => row("O(n)", "O(n lg n)", "O(n lg n)", "O(n)", true),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Work counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortStats {
    /// Comparator calls; `None` for counting sort, which never compares.
    pub comparisons: Option<u64>,
    /// Swaps or shifts, for the algorithms that define them.
    pub swaps: Option<u64>,
}

/// One timed run of one algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    /// What ran.
    pub algorithm: Algorithm,
    /// Input length.
    pub size: usize,
    /// Wall-clock time of the sort call.
    pub elapsed: Duration,
    /// Work counters.
    pub stats: SortStats,
    /// Whether the output was ascending.
    pub sorted: bool,
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dash = |n: Option<u64>| n.map_or_else(|| "-".to_owned(), |n| n.to_string());
        write!(
            f,
            "{:<10} {:>8} {:>12.3?} {:>12} {:>12}",
            self.algorithm.name(),
            self.size,
            self.elapsed,
            dash(self.stats.comparisons),
            dash(self.stats.swaps),
        )
    }
}

/// Which algorithms to run and when to skip the quadratic ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Algorithms to run, in order.
    pub algorithms: Vec<Algorithm>,
    /// Inputs longer than this skip the quadratic sorts; `None` never skips.
    pub quadratic_limit: Option<usize>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            algorithms: Algorithm::ALL.to_vec(),
            quadratic_limit: Some(5_000),
        }
    }
}

impl BenchConfig {
    /// Whether `algorithm` runs on an input of length `size`.
    pub fn includes(&self, algorithm: Algorithm, size: usize) -> bool {
        self.algorithms.contains(&algorithm)
            && !(algorithm.is_quadratic() && self.quadratic_limit.is_some_and(|limit| size > limit))
    }
}

/// Times `algorithm` on a copy of `data`.
///
/// # Errors
///
/// Counting sort rejects negative or oversized values; see
/// [`counting_sort`](super::counting_sort).
pub fn measure<T: PrimInt>(algorithm: Algorithm, data: &[T]) -> Result<Measurement> {
    let mut comparisons = 0u64;
    let counted = |a: &T, b: &T| -> Ordering {
        comparisons += 1;
        a.cmp(b)
    };

    let start = Instant::now();
    let (sorted, swaps) = match algorithm {
        Algorithm::Bubble => {
            let report = bubble_sort_by(data, counted);
            (report.sorted, Some(report.swaps))
        }
        Algorithm::Selection => {
            let report = selection_sort_by(data, counted);
            (report.sorted, Some(report.swaps))
        }
        Algorithm::Insertion => {
            let report = insertion_sort_by(data, counted);
            (report.sorted, Some(report.swaps))
        }
        Algorithm::Merge => (merge_sort_by(data, counted), None),
        Algorithm::Quick => (quick_sort_by(data, counted), None),
        Algorithm::Counting => (counting_sort(data)?, None),
        Algorithm::Platform => {
            let mut sorted = data.to_vec();
            sorted.sort_by(counted);
            (sorted, None)
        }
    };
    let elapsed = start.elapsed();

    let measurement = Measurement {
        algorithm,
        size: data.len(),
        elapsed,
        stats: SortStats {
            comparisons: (algorithm != Algorithm::Counting).then_some(comparisons),
            swaps,
        },
        sorted: is_sorted(&sorted),
    };
    debug_event!(
        algorithm = measurement.algorithm.name(),
        size = measurement.size,
        elapsed = ?measurement.elapsed,
        comparisons = ?measurement.stats.comparisons,
        "sort measured"
    );
    Ok(measurement)
}

/// Runs every algorithm `config` selects for `data`, in config order.
///
/// # Errors
///
/// The first failing [`measure`] call.
pub fn run<T: PrimInt>(config: &BenchConfig, data: &[T]) -> Result<Vec<Measurement>> {
    config
        .algorithms
        .iter()
        .filter(|&&algorithm| config.includes(algorithm, data.len()))
        .map(|&algorithm| measure(algorithm, data))
        .collect()
}
