extern crate criterion;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lazy_priority_queue::PriorityQueue;

mod generators;
use crate::generators::{gen_random_priorities, gen_random_usizes, get_random_strings};

pub fn bench_from_iter(c: &mut Criterion) {
    let base_tasks = gen_random_usizes(100_000, 0);
    let base_priorities = gen_random_priorities(100_000, 7);

    let mut group = c.benchmark_group("from_iter_usize");
    for &size in &[20_000, 40_000, 60_000, 80_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("collect", size), &size, |b, &size| {
            b.iter(|| {
                let queue: PriorityQueue<usize, i64> = base_tasks[..size]
                    .iter()
                    .cloned()
                    .zip(base_priorities[..size].iter().cloned())
                    .collect();
                black_box(queue)
            });
        });
        group.bench_with_input(
            BenchmarkId::new("add_task_with_capacity", size),
            &size,
            |b, &size| {
                b.iter(|| {
                    let mut queue = PriorityQueue::with_capacity(size);
                    for (&task, &priority) in base_tasks[..size].iter().zip(&base_priorities[..size]) {
                        queue.add_task(task, priority);
                    }
                    black_box(queue)
                });
            },
        );
    }

    group.finish();

    let mut group = c.benchmark_group("from_iter_string");
    let string_tasks = get_random_strings(50_000, 0);
    let string_priorities = gen_random_priorities(50_000, 7);

    for &size in &[10_000, 20_000, 30_000, 40_000, 50_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let queue: PriorityQueue<String, i64> = string_tasks[..size]
                    .iter()
                    .cloned()
                    .zip(string_priorities[..size].iter().cloned())
                    .collect();
                black_box(queue)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_from_iter);
criterion_main!(benches);
