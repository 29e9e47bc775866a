use arbor::sort::{
    bubble_sort, counting_sort, insertion_sort, merge_sort, platform_sort, quick_sort,
    selection_sort,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_input(len: usize) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..len).map(|_| rng.gen_range(0..10_000)).collect()
}

fn bench_quadratic_sorts(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadratic_sorts");

    for len in [100, 1_000] {
        let data = random_input(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("bubble", len), &data, |b, data| {
            b.iter(|| black_box(bubble_sort(data)));
        });
        group.bench_with_input(BenchmarkId::new("selection", len), &data, |b, data| {
            b.iter(|| black_box(selection_sort(data)));
        });
        group.bench_with_input(BenchmarkId::new("insertion", len), &data, |b, data| {
            b.iter(|| black_box(insertion_sort(data)));
        });
    }

    group.finish();
}

fn bench_fast_sorts(c: &mut Criterion) {
    let mut group = c.benchmark_group("fast_sorts");

    for len in [1_000, 10_000, 100_000] {
        let data = random_input(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("merge", len), &data, |b, data| {
            b.iter(|| black_box(merge_sort(data)));
        });
        group.bench_with_input(BenchmarkId::new("quick", len), &data, |b, data| {
            b.iter(|| black_box(quick_sort(data)));
        });
        group.bench_with_input(BenchmarkId::new("counting", len), &data, |b, data| {
            b.iter(|| black_box(counting_sort(data)));
        });
        group.bench_with_input(BenchmarkId::new("platform", len), &data, |b, data| {
            b.iter(|| black_box(platform_sort(data)));
        });
    }

    group.finish();
}

fn bench_presorted(c: &mut Criterion) {
    let mut group = c.benchmark_group("presorted_input");
    let data: Vec<u32> = (0..1_000).collect();

    // Early exit and zero shifts make both linear here.
    group.bench_function("bubble", |b| b.iter(|| black_box(bubble_sort(&data))));
    group.bench_function("insertion", |b| b.iter(|| black_box(insertion_sort(&data))));
    group.bench_function("quick", |b| b.iter(|| black_box(quick_sort(&data))));

    group.finish();
}

criterion_group!(benches, bench_quadratic_sorts, bench_fast_sorts, bench_presorted);
criterion_main!(benches);
