use arbor::sort::{
    self, bubble_sort, bubble_sort_by, counting_sort, counting_sort_by_key, insertion_sort,
    insertion_sort_by, merge_sort, merge_sort_by, platform_sort, quick_sort, quick_sort_by,
    selection_sort, selection_sort_by,
};
use arbor::{Algorithm, BenchConfig};
use proptest::prelude::*;

/// A record sorted by `key`; `tag` records the input position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Tagged {
    key: u8,
    tag: usize,
}

fn tagged(keys: &[u8]) -> Vec<Tagged> {
    keys.iter()
        .enumerate()
        .map(|(tag, &key)| Tagged { key, tag })
        .collect()
}

fn by_key(a: &Tagged, b: &Tagged) -> core::cmp::Ordering {
    a.key.cmp(&b.key)
}

fn inversions(data: &[i32]) -> u64 {
    let mut count = 0;
    for i in 0..data.len() {
        for j in i + 1..data.len() {
            if data[i] > data[j] {
                count += 1;
            }
        }
    }
    count
}

proptest! {
    #[test]
    fn test_all_sorts_match_platform_sort(data in proptest::collection::vec(-500i32..500, 0..120)) {
        let expected = platform_sort(&data);
        prop_assert_eq!(bubble_sort(&data).sorted, expected.clone());
        prop_assert_eq!(selection_sort(&data).sorted, expected.clone());
        prop_assert_eq!(insertion_sort(&data).sorted, expected.clone());
        prop_assert_eq!(merge_sort(&data), expected.clone());
        prop_assert_eq!(quick_sort(&data), expected);
    }

    #[test]
    fn test_counting_sort_matches_platform_sort(data in proptest::collection::vec(0u32..2_000, 0..200)) {
        prop_assert_eq!(counting_sort(&data).unwrap(), platform_sort(&data));
    }

    #[test]
    fn test_stable_sorts_preserve_tag_order(keys in proptest::collection::vec(0u8..6, 0..80)) {
        let records = tagged(&keys);
        let mut expected = records.clone();
        expected.sort_by(by_key);

        prop_assert_eq!(bubble_sort_by(&records, by_key).sorted, expected.clone());
        prop_assert_eq!(insertion_sort_by(&records, by_key).sorted, expected.clone());
        prop_assert_eq!(merge_sort_by(&records, by_key), expected.clone());
        prop_assert_eq!(counting_sort_by_key(&records, 255, |r| r.key).unwrap(), expected);
    }

    #[test]
    fn test_unstable_sorts_still_order_keys(keys in proptest::collection::vec(0u8..6, 0..80)) {
        let records = tagged(&keys);
        let mut expected: Vec<u8> = keys.clone();
        expected.sort_unstable();

        let by_selection: Vec<u8> = selection_sort_by(&records, by_key).sorted.iter().map(|r| r.key).collect();
        let by_quick: Vec<u8> = quick_sort_by(&records, by_key).iter().map(|r| r.key).collect();
        prop_assert_eq!(by_selection, expected.clone());
        prop_assert_eq!(by_quick, expected);
    }

    #[test]
    fn test_swap_counts_equal_inversions(data in proptest::collection::vec(-50i32..50, 0..60)) {
        let inv = inversions(&data);
        prop_assert_eq!(bubble_sort(&data).swaps, inv);
        prop_assert_eq!(insertion_sort(&data).swaps, inv);

        let n = data.len() as u64;
        prop_assert_eq!(selection_sort(&data).comparisons, n * n.saturating_sub(1) / 2);
    }

    #[test]
    fn test_bench_run_reports_sorted_output(data in proptest::collection::vec(0i64..1_000, 0..300)) {
        let config = BenchConfig { quadratic_limit: Some(100), ..BenchConfig::default() };
        let results = sort::bench::run(&config, &data).unwrap();
        for m in &results {
            prop_assert!(m.sorted, "{} produced unsorted output", m.algorithm);
            prop_assert_eq!(m.size, data.len());
            prop_assert!(data.len() <= 100 || !m.algorithm.is_quadratic());
        }
    }
}

#[test]
fn measurements_serialize_to_json() {
    let measurement = sort::bench::measure(Algorithm::Insertion, &[2u8, 1]).unwrap();
    let json = serde_json::to_value(&measurement).unwrap();
    assert_eq!(json["algorithm"], "insertion");
    assert_eq!(json["size"], 2);
    assert_eq!(json["stats"]["swaps"], 1);
    assert_eq!(json["sorted"], true);
}
