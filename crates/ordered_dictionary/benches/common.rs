use std::hint::black_box;

use bench::{Runtime, configure};
use criterion::measurement::Measurement;
use criterion::{BatchSize, BenchmarkGroup, BenchmarkId};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use ordered_dictionary::{OrderedDictionary, OrderedMap, StdBTreeMap};

const SHUFFLED_SIZES: [usize; 4] = [1_000, 8_000, 64_000, 256_000];
// Sorted input turns the dictionary into a list, so these stay small.
const SORTED_SIZES: [usize; 4] = [250, 500, 1_000, 2_000];
const MISS_EVERY: usize = 5;
const SEED: u64 = 0x0DD1_C7_2026;

#[derive(Clone, Copy)]
pub enum Order {
    Shuffled,
    Ascending,
}

impl Order {
    fn label(self) -> &'static str {
        match self {
            Order::Shuffled => "shuffled",
            Order::Ascending => "ascending",
        }
    }

    fn sizes(self) -> &'static [usize] {
        match self {
            Order::Shuffled => &SHUFFLED_SIZES,
            Order::Ascending => &SORTED_SIZES,
        }
    }

    /// Even keys `0, 2, .., 2 * (size - 1)`, leaving odd keys free for misses.
    fn keys(self, size: usize) -> Vec<u64> {
        let mut keys: Vec<u64> = (0..size as u64).map(|k| k * 2).collect();
        if let Order::Shuffled = self {
            keys.shuffle(&mut StdRng::seed_from_u64(SEED ^ size as u64));
        }
        keys
    }
}

fn build<M: OrderedMap<Key = u64, Value = u64>>(keys: &[u64]) -> M {
    let mut map = M::new();
    for &k in keys {
        map.insert(k, !k);
    }
    map
}

/// Inserting every key of a fresh map; the dictionary's cost follows the
/// shape the insertion order produces.
pub fn bench_build<M, T>(group: &mut BenchmarkGroup<'_, T>, label: &str, order: Order)
where
    T: Measurement,
    M: OrderedMap<Key = u64, Value = u64>,
{
    configure(group, Runtime::Short);
    for &size in order.sizes() {
        let keys = order.keys(size);
        let id = BenchmarkId::new(format!("{label}/{}", order.label()), size);
        group.bench_function(id, |bencher| {
            bencher.iter(|| black_box(build::<M>(&keys).len()))
        });
    }
}

/// Looks up every stored key plus one absent key per `MISS_EVERY` hits.
pub fn bench_lookup<M, T>(group: &mut BenchmarkGroup<'_, T>, label: &str, order: Order)
where
    T: Measurement,
    M: OrderedMap<Key = u64, Value = u64>,
{
    configure(group, Runtime::Short);
    for &size in order.sizes() {
        let keys = order.keys(size);
        let map = build::<M>(&keys);
        let mut rng = StdRng::seed_from_u64(SEED ^ 0x100 ^ size as u64);
        let mut hits = keys.clone();
        hits.shuffle(&mut rng);
        let mut queries = Vec::with_capacity(hits.len() + hits.len() / MISS_EVERY + 1);
        for chunk in hits.chunks(MISS_EVERY) {
            queries.push(rng.random_range(0..size as u64) * 2 + 1);
            queries.extend_from_slice(chunk);
        }

        let id = BenchmarkId::new(format!("{label}/{}", order.label()), size);
        group.bench_function(id, |bencher| {
            bencher.iter(|| {
                let mut hits = 0_usize;
                for q in &queries {
                    hits += usize::from(map.get(q).is_some());
                }
                black_box(hits)
            })
        });
    }
}

/// Deletes every key of a shuffled build in another shuffled order. Interior
/// deletions dominate, so most calls take one of the two-child successor
/// paths.
pub fn bench_drain<M, T>(group: &mut BenchmarkGroup<'_, T>, label: &str)
where
    T: Measurement,
    M: OrderedMap<Key = u64, Value = u64>,
{
    configure(group, Runtime::Long);
    for &size in &SHUFFLED_SIZES {
        let keys = Order::Shuffled.keys(size);
        let mut victims = keys.clone();
        victims.shuffle(&mut StdRng::seed_from_u64(SEED ^ 0x200 ^ size as u64));

        group.bench_function(BenchmarkId::new(label, size), |bencher| {
            bencher.iter_batched(
                || build::<M>(&keys),
                |mut map| {
                    for k in &victims {
                        black_box(map.remove(k));
                    }
                    debug_assert!(map.is_empty());
                    map
                },
                BatchSize::LargeInput,
            )
        });
    }
}

pub fn bench_traverse<M, T>(group: &mut BenchmarkGroup<'_, T>, label: &str)
where
    T: Measurement,
    M: OrderedMap<Key = u64, Value = u64>,
{
    configure(group, Runtime::Long);
    for &size in &SHUFFLED_SIZES {
        let map = build::<M>(&Order::Shuffled.keys(size));
        group.bench_function(BenchmarkId::new(label, size), |bencher| {
            bencher.iter(|| {
                let mut acc = 0_u64;
                map.traverse(|&k, &v| acc = acc.wrapping_add(k ^ v).rotate_left(1));
                black_box(acc)
            })
        });
    }
}

pub fn bench_all_build<T: Measurement>(group: &mut BenchmarkGroup<'_, T>) {
    for order in [Order::Shuffled, Order::Ascending] {
        bench_build::<StdBTreeMap<u64, u64>, _>(group, "std_btree", order);
        bench_build::<OrderedDictionary<u64, u64>, _>(group, "bst", order);
    }
}

pub fn bench_all_lookup<T: Measurement>(group: &mut BenchmarkGroup<'_, T>) {
    for order in [Order::Shuffled, Order::Ascending] {
        bench_lookup::<StdBTreeMap<u64, u64>, _>(group, "std_btree", order);
        bench_lookup::<OrderedDictionary<u64, u64>, _>(group, "bst", order);
    }
}

pub fn bench_all_drain<T: Measurement>(group: &mut BenchmarkGroup<'_, T>) {
    bench_drain::<StdBTreeMap<u64, u64>, _>(group, "std_btree");
    bench_drain::<OrderedDictionary<u64, u64>, _>(group, "bst");
}

pub fn bench_all_traverse<T: Measurement>(group: &mut BenchmarkGroup<'_, T>) {
    bench_traverse::<StdBTreeMap<u64, u64>, _>(group, "std_btree");
    bench_traverse::<OrderedDictionary<u64, u64>, _>(group, "bst");
}
