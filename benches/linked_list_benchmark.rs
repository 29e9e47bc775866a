use arbor::{DoublyLinkedList, SinglyLinkedList};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::LinkedList;

fn bench_linked_list_iter(c: &mut Criterion) {
    let mut group = c.benchmark_group("linked_list_iter");

    group.bench_function("std_linked_list_iter", |b| {
        let list: LinkedList<u64> = (0..1000).collect();
        b.iter(|| black_box(list.iter().sum::<u64>()));
    });

    group.bench_function("singly_linked_list_iter", |b| {
        let list: SinglyLinkedList<u64> = (0..1000).collect();
        b.iter(|| black_box(list.iter().sum::<u64>()));
    });

    group.bench_function("doubly_linked_list_iter", |b| {
        let list: DoublyLinkedList<u64> = (0..1000).collect();
        b.iter(|| black_box(list.iter().sum::<u64>()));
    });

    group.finish();
}

fn bench_linked_list_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("linked_list_push_pop");

    group.bench_function("std_linked_list_push_pop", |b| {
        b.iter(|| {
            let mut list = LinkedList::new();
            for i in 0..1000 {
                list.push_back(i);
            }
            while list.pop_front().is_some() {}
        });
    });

    group.bench_function("doubly_linked_list_push_pop", |b| {
        b.iter(|| {
            let mut list = DoublyLinkedList::new();
            for i in 0..1000 {
                list.append(i);
            }
            while list.pop_front().is_some() {}
        });
    });

    group.bench_function("singly_linked_list_prepend_delete_first", |b| {
        b.iter(|| {
            let mut list = SinglyLinkedList::new();
            for i in 0..1000 {
                list.prepend(i);
            }
            while list.delete_first().is_some() {}
        });
    });

    group.finish();
}

fn bench_two_pointer(c: &mut Criterion) {
    let mut group = c.benchmark_group("linked_list_two_pointer");
    let mut list: SinglyLinkedList<u32> = (0..10_000).collect();

    group.bench_function("find_middle", |b| b.iter(|| black_box(list.find_middle())));
    group.bench_function("has_cycle_acyclic", |b| b.iter(|| black_box(list.has_cycle())));

    list.link_tail_to(5_000).ok();
    group.bench_function("has_cycle_looped", |b| b.iter(|| black_box(list.has_cycle())));

    group.finish();
}

fn bench_reverse(c: &mut Criterion) {
    let mut list: SinglyLinkedList<u32> = (0..10_000).collect();
    c.bench_function("singly_reverse_10k", |b| {
        b.iter(|| {
            list.reverse();
            black_box(list.len());
        });
    });
}

criterion_group!(
    benches,
    bench_linked_list_iter,
    bench_linked_list_push_pop,
    bench_two_pointer,
    bench_reverse
);
criterion_main!(benches);
