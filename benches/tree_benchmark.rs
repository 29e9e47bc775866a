use arbor::OrderedTree;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

const SIZE: usize = 10_000;

fn keys() -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(7);
    (0..SIZE).map(|_| rng.gen_range(0..(SIZE as u32) / 2)).collect()
}

fn bench_tree_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_insert");
    let keys = keys();

    group.bench_function("ordered_tree", |b| {
        b.iter(|| {
            let mut tree = OrderedTree::new();
            for &k in &keys {
                tree.insert(k);
            }
            black_box(tree.len());
        });
    });

    group.bench_function("std_btree_map_counts", |b| {
        b.iter(|| {
            let mut map: BTreeMap<u32, usize> = BTreeMap::new();
            for &k in &keys {
                *map.entry(k).or_default() += 1;
            }
            black_box(map.len());
        });
    });

    group.finish();
}

fn bench_tree_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_queries");
    let keys = keys();
    let tree: OrderedTree<u32> = keys.iter().copied().collect();

    group.bench_function("search", |b| {
        b.iter(|| {
            let mut hits = 0;
            for k in 0..1_000 {
                hits += usize::from(tree.search(&k));
            }
            black_box(hits);
        });
    });

    group.bench_function("in_order", |b| b.iter(|| black_box(tree.in_order())));
    group.bench_function("level_order", |b| b.iter(|| black_box(tree.level_order())));
    group.bench_function("is_valid_bst", |b| b.iter(|| black_box(tree.is_valid_bst())));

    group.finish();
}

fn bench_tree_delete(c: &mut Criterion) {
    let keys = keys();

    c.bench_function("tree_delete_all", |b| {
        b.iter_batched(
            || keys.iter().copied().collect::<OrderedTree<u32>>(),
            |mut tree| {
                for k in &keys {
                    tree.delete(k);
                }
                black_box(tree.is_empty());
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_tree_insert, bench_tree_queries, bench_tree_delete);
criterion_main!(benches);
