use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mola_singly_list::linked_list::singly::SinglyLinkedList;
use rand::seq::SliceRandom;
use rand::{SeedableRng, rngs::StdRng};
use std::hint::black_box;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn filled(size: usize) -> SinglyLinkedList<u64> {
    (0..size as u64).collect()
}

fn push_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");
    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(BenchmarkId::new("front", size), |b| {
            b.iter(|| {
                let mut list = SinglyLinkedList::new();
                for i in 0..size as u64 {
                    list.push_front(i).unwrap();
                }
                black_box(list)
            });
        });

        group.bench_function(BenchmarkId::new("back", size), |b| {
            b.iter(|| {
                let mut list = SinglyLinkedList::new();
                for i in 0..size as u64 {
                    list.push_back(i).unwrap();
                }
                black_box(list)
            });
        });
    }
    group.finish();
}

fn find_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");
    let mut rng = StdRng::seed_from_u64(42);
    for size in SIZES {
        let list = filled(size);
        let mut keys: Vec<u64> = (0..size as u64).collect();
        keys.shuffle(&mut rng);

        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            let mut i = 0;
            b.iter(|| {
                let key = keys[i % keys.len()];
                i += 1;
                black_box(list.find(&key))
            });
        });
    }
    group.finish();
}

fn delete_and_reverse_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("mutate");
    for size in SIZES {
        group.bench_function(BenchmarkId::new("delete_every_tenth", size), |b| {
            b.iter_with_setup(
                || filled(size),
                |mut list| {
                    for key in (0..size as u64).step_by(10) {
                        black_box(list.delete(&key));
                    }
                    list
                },
            );
        });

        group.bench_function(BenchmarkId::new("reverse", size), |b| {
            let mut list = filled(size);
            b.iter(|| list.reverse().unwrap());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    push_benchmark,
    find_benchmark,
    delete_and_reverse_benchmark
);
criterion_main!(benches);
