use std::hint::black_box;

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
type RandomState = hashbrown::DefaultHashBuilder;
type LinkedMap<K, V> = linkedmap::linked_map::LinkedMap<K, V, RandomState>;

type HashLinkedMap<K, V> = hashlink::LinkedHashMap<K, V, RandomState>;
type IndexMap<K, V> = indexmap::IndexMap<K, V, RandomState>;

const SIZES: &[usize] = &[10000];

fn filled_linked_map(size: usize) -> LinkedMap<usize, usize> {
    let mut map = LinkedMap::default();
    for i in 0..size {
        map.upsert(i, i * 2);
    }
    map
}

fn filled_hashlinked(size: usize) -> HashLinkedMap<usize, usize> {
    let mut map = HashLinkedMap::default();
    for i in 0..size {
        map.insert(i, i * 2);
    }
    map
}

fn filled_indexmap(size: usize) -> IndexMap<usize, usize> {
    let mut map = IndexMap::default();
    for i in 0..size {
        map.insert(i, i * 2);
    }
    map
}

fn bench_insertion_at_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertion_at_end");

    for &size in SIZES {
        group.throughput(criterion::Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("linkedmap", size), &size, |b, &size| {
            b.iter(|| {
                let mut map: LinkedMap<usize, usize> = LinkedMap::default();
                for i in 0..size {
                    map.upsert(black_box(i), black_box(i * 2));
                }
                map
            })
        });

        group.bench_with_input(
            BenchmarkId::new("linkedmap_preallocated", size),
            &size,
            |b, &size| {
                b.iter(|| {
                    let mut map: LinkedMap<usize, usize> =
                        LinkedMap::with_capacity_and_hasher(size, RandomState::default());
                    for i in 0..size {
                        map.upsert(black_box(i), black_box(i * 2));
                    }
                    map
                })
            },
        );

        group.bench_with_input(BenchmarkId::new("indexmap", size), &size, |b, &size| {
            b.iter(|| {
                let mut map = IndexMap::default();
                for i in 0..size {
                    map.insert(black_box(i), black_box(i * 2));
                }
                map
            })
        });

        group.bench_with_input(BenchmarkId::new("hashlinked", size), &size, |b, &size| {
            b.iter(|| {
                let mut map = HashLinkedMap::default();
                for i in 0..size {
                    map.insert(black_box(i), black_box(i * 2));
                }
                map
            })
        });
    }

    group.finish();
}

fn bench_pop_from_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("pop_from_front");

    for &size in SIZES {
        group.throughput(criterion::Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("linkedmap", size), &size, |b, &size| {
            b.iter_batched(
                || filled_linked_map(size),
                |mut map| {
                    let mut count = 0;
                    while map.pop_front().is_some() {
                        count += 1;
                    }
                    count
                },
                criterion::BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("hashlinked", size), &size, |b, &size| {
            b.iter_batched(
                || filled_hashlinked(size),
                |mut map| {
                    let mut count = 0;
                    while map.pop_front().is_some() {
                        count += 1;
                    }
                    count
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_remove_from_middle(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_from_middle");

    for &size in SIZES {
        let mut next_down = size / 2;
        let mut next_up = size / 2 + 1;
        let mut middle_keys = Vec::with_capacity(size);
        for _ in 0..size / 2 {
            middle_keys.push(next_down);
            middle_keys.push(next_up);
            next_down = next_down.saturating_sub(1);
            if next_up < size - 1 {
                next_up += 1;
            }
        }

        group.throughput(criterion::Throughput::Elements(middle_keys.len() as u64));

        group.bench_with_input(BenchmarkId::new("linkedmap", size), &size, |b, &size| {
            b.iter_batched(
                || filled_linked_map(size),
                |mut map| {
                    for &key in &middle_keys {
                        map.remove(&black_box(key));
                    }
                    map
                },
                criterion::BatchSize::SmallInput,
            )
        });

        group.bench_with_input(
            BenchmarkId::new("indexmap_shift_remove", size),
            &size,
            |b, &size| {
                b.iter_batched(
                    || filled_indexmap(size),
                    |mut map| {
                        for &key in &middle_keys {
                            map.shift_remove(&black_box(key));
                        }
                        map
                    },
                    criterion::BatchSize::SmallInput,
                )
            },
        );

        group.bench_with_input(BenchmarkId::new("hashlinked", size), &size, |b, &size| {
            b.iter_batched(
                || filled_hashlinked(size),
                |mut map| {
                    for &key in &middle_keys {
                        map.remove(&black_box(key));
                    }
                    map
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_move_to_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_to_front");

    for &size in SIZES {
        let move_keys: Vec<usize> = (0..1000).map(|_| rand::random_range(0..size)).collect();

        group.throughput(criterion::Throughput::Elements(move_keys.len() as u64));

        group.bench_with_input(BenchmarkId::new("linkedmap", size), &size, |b, &size| {
            let mut map = filled_linked_map(size);
            b.iter(|| {
                for &key in &move_keys {
                    map.move_to_front(&black_box(key));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("hashlinked", size), &size, |b, &size| {
            let mut map = filled_hashlinked(size);
            b.iter(|| {
                for &key in &move_keys {
                    map.to_front(&black_box(key));
                }
            })
        });

        group.bench_with_input(
            BenchmarkId::new("indexmap_move_index", size),
            &size,
            |b, &size| {
                let mut map = filled_indexmap(size);
                b.iter(|| {
                    for &key in &move_keys {
                        if let Some(index) = map.get_index_of(&black_box(key)) {
                            map.move_index(index, 0);
                        }
                    }
                })
            },
        );
    }

    group.finish();
}

fn bench_move_after(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_after");

    for &size in SIZES {
        let pairs: Vec<(usize, usize)> = (0..1000)
            .map(|_| (rand::random_range(0..size), rand::random_range(0..size)))
            .collect();

        group.throughput(criterion::Throughput::Elements(pairs.len() as u64));

        group.bench_with_input(BenchmarkId::new("linkedmap", size), &size, |b, &size| {
            let mut map = filled_linked_map(size);
            b.iter(|| {
                for &(key, mark) in &pairs {
                    map.move_after(&black_box(key), &black_box(mark));
                }
            })
        });

        group.bench_with_input(
            BenchmarkId::new("indexmap_move_index", size),
            &size,
            |b, &size| {
                let mut map = filled_indexmap(size);
                b.iter(|| {
                    for &(key, mark) in &pairs {
                        let (Some(from), Some(to)) = (
                            map.get_index_of(&black_box(key)),
                            map.get_index_of(&black_box(mark)),
                        ) else {
                            continue;
                        };
                        let to = if from < to { to } else { to + 1 };
                        if from != to && to < map.len() {
                            map.move_index(from, to);
                        }
                    }
                })
            },
        );
    }

    group.finish();
}

fn bench_random_access_sparse(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_access_sparse");

    for &size in SIZES {
        let access_keys: Vec<usize> = (0..100).map(|_| rand::random_range(0..size)).collect();

        group.throughput(criterion::Throughput::Elements(access_keys.len() as u64));

        group.bench_with_input(BenchmarkId::new("linkedmap", size), &size, |b, &size| {
            let mut map = filled_linked_map(size);
            for i in (0..size).step_by(3) {
                map.remove(&i);
            }

            b.iter(|| {
                let mut sum = 0;
                for &key in &access_keys {
                    if let Some(value) = map.get(&black_box(key)) {
                        sum += *value;
                    }
                }
                sum
            })
        });

        group.bench_with_input(BenchmarkId::new("indexmap", size), &size, |b, &size| {
            let mut map = filled_indexmap(size);
            for i in (0..size).step_by(3) {
                map.swap_remove(&i);
            }

            b.iter(|| {
                let mut sum = 0;
                for &key in &access_keys {
                    if let Some(value) = map.get(&black_box(key)) {
                        sum += *value;
                    }
                }
                sum
            })
        });

        group.bench_with_input(BenchmarkId::new("hashlinked", size), &size, |b, &size| {
            let mut map = filled_hashlinked(size);
            for i in (0..size).step_by(3) {
                map.remove(&i);
            }

            b.iter(|| {
                let mut sum = 0;
                for &key in &access_keys {
                    if let Some(value) = map.get(&black_box(key)) {
                        sum += *value;
                    }
                }
                sum
            })
        });
    }

    group.finish();
}

fn bench_iteration_full(c: &mut Criterion) {
    let mut group = c.benchmark_group("iteration_full");

    for &size in SIZES {
        group.throughput(criterion::Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("linkedmap", size), &size, |b, &size| {
            let map = filled_linked_map(size);
            b.iter(|| {
                let mut sum = 0;
                for (key, value) in map.iter() {
                    sum += black_box(*key) + black_box(*value);
                }
                sum
            })
        });

        group.bench_with_input(
            BenchmarkId::new("linkedmap_range", size),
            &size,
            |b, &size| {
                let map = filled_linked_map(size);
                b.iter(|| {
                    let mut sum = 0;
                    map.range(|key, value| {
                        sum += black_box(*key) + black_box(*value);
                        true
                    });
                    sum
                })
            },
        );

        group.bench_with_input(BenchmarkId::new("indexmap", size), &size, |b, &size| {
            let map = filled_indexmap(size);
            b.iter(|| {
                let mut sum = 0;
                for (key, value) in map.iter() {
                    sum += black_box(*key) + black_box(*value);
                }
                sum
            })
        });

        group.bench_with_input(BenchmarkId::new("hashlinked", size), &size, |b, &size| {
            let map = filled_hashlinked(size);
            b.iter(|| {
                let mut sum = 0;
                for (key, value) in map.iter() {
                    sum += black_box(*key) + black_box(*value);
                }
                sum
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insertion_at_end,
    bench_pop_from_front,
    bench_remove_from_middle,
    bench_move_to_front,
    bench_move_after,
    bench_random_access_sparse,
    bench_iteration_full
);
criterion_main!(benches);
