use core::hash::BuildHasher;
use core::hint::black_box;
use std::collections::HashMap as StdHashMap;

use criterion::AxisScale;
use criterion::BatchSize;
use criterion::Criterion;
use criterion::PlotConfiguration;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use hashbrown::HashMap as HashbrownHashMap;
use rand::SeedableRng;
use rand::TryRngCore;
use rand::rngs::OsRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use robin_map::HashMap as RobinHashMap;
use siphasher::sip::SipHasher;

/// All three maps hash through the same SipHash keys so the comparison
/// measures table mechanics, not hasher quality.
#[derive(Clone, Copy)]
struct SipHashBuilder {
    k1: u64,
    k2: u64,
}

impl SipHashBuilder {
    fn from_os_rng() -> Self {
        let mut rng = OsRng;
        Self {
            k1: rng.try_next_u64().unwrap(),
            k2: rng.try_next_u64().unwrap(),
        }
    }
}

impl BuildHasher for SipHashBuilder {
    type Hasher = SipHasher;

    fn build_hasher(&self) -> Self::Hasher {
        SipHasher::new_with_keys(self.k1, self.k2)
    }
}

trait BenchMap {
    fn with_hasher(hash_builder: SipHashBuilder) -> Self;
    fn insert_pair(&mut self, key: u64, value: u64);
    fn lookup(&self, key: &u64) -> bool;
    fn remove_key(&mut self, key: &u64) -> bool;
}

impl BenchMap for RobinHashMap<u64, u64, SipHashBuilder> {
    fn with_hasher(hash_builder: SipHashBuilder) -> Self {
        RobinHashMap::with_hasher(hash_builder)
    }

    fn insert_pair(&mut self, key: u64, value: u64) {
        self.insert(key, value);
    }

    fn lookup(&self, key: &u64) -> bool {
        self.get(key).is_some()
    }

    fn remove_key(&mut self, key: &u64) -> bool {
        self.remove(key).is_some()
    }
}

impl BenchMap for HashbrownHashMap<u64, u64, SipHashBuilder> {
    fn with_hasher(hash_builder: SipHashBuilder) -> Self {
        HashbrownHashMap::with_hasher(hash_builder)
    }

    fn insert_pair(&mut self, key: u64, value: u64) {
        self.insert(key, value);
    }

    fn lookup(&self, key: &u64) -> bool {
        self.get(key).is_some()
    }

    fn remove_key(&mut self, key: &u64) -> bool {
        self.remove(key).is_some()
    }
}

impl BenchMap for StdHashMap<u64, u64, SipHashBuilder> {
    fn with_hasher(hash_builder: SipHashBuilder) -> Self {
        StdHashMap::with_hasher(hash_builder)
    }

    fn insert_pair(&mut self, key: u64, value: u64) {
        self.insert(key, value);
    }

    fn lookup(&self, key: &u64) -> bool {
        self.get(key).is_some()
    }

    fn remove_key(&mut self, key: &u64) -> bool {
        self.remove(key).is_some()
    }
}

const SIZES: &[usize] = &[(1 << 10), (1 << 13), (1 << 16)];

fn shuffled_keys(count: usize) -> Vec<u64> {
    let mut keys: Vec<u64> = (0..count as u64).collect();
    keys.shuffle(&mut SmallRng::from_os_rng());
    keys
}

fn build_map<M: BenchMap>(hash_builder: SipHashBuilder, keys: &[u64]) -> M {
    let mut map = M::with_hasher(hash_builder);
    for &key in keys {
        map.insert_pair(key, key.wrapping_mul(3));
    }
    map
}

fn bench_insert_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_random");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));
    let hash_builder = SipHashBuilder::from_os_rng();

    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        for (name, run) in [
            ("robin_map", run_insert::<RobinHashMap<u64, u64, SipHashBuilder>>),
            (
                "hashbrown",
                run_insert::<HashbrownHashMap<u64, u64, SipHashBuilder>>,
            ),
            ("std", run_insert::<StdHashMap<u64, u64, SipHashBuilder>>),
        ] {
            group.bench_function(format!("{name}/{size}"), |b| {
                b.iter_batched(
                    || shuffled_keys(size),
                    |keys| run(hash_builder, keys),
                    BatchSize::SmallInput,
                )
            });
        }
    }

    group.finish();
}

fn run_insert<M: BenchMap>(hash_builder: SipHashBuilder, keys: Vec<u64>) {
    let mut map = M::with_hasher(hash_builder);
    for key in keys {
        map.insert_pair(key, key.wrapping_mul(3));
    }
    black_box(&map);
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));
    let hash_builder = SipHashBuilder::from_os_rng();

    for &size in SIZES {
        let keys = shuffled_keys(size);
        group.throughput(Throughput::Elements(size as u64));

        macro_rules! lookup_benches {
            ($name:literal, $map_type:ty) => {
                let map: $map_type = build_map(hash_builder, &keys);
                group.bench_function(format!("{}_hit/{size}", $name), |b| {
                    b.iter(|| {
                        let mut hits = 0usize;
                        for key in &keys {
                            hits += usize::from(map.lookup(black_box(key)));
                        }
                        black_box(hits)
                    })
                });
                group.bench_function(format!("{}_miss/{size}", $name), |b| {
                    b.iter(|| {
                        let mut hits = 0usize;
                        for key in &keys {
                            let missing = key + size as u64;
                            hits += usize::from(map.lookup(black_box(&missing)));
                        }
                        black_box(hits)
                    })
                });
            };
        }

        lookup_benches!("robin_map", RobinHashMap<u64, u64, SipHashBuilder>);
        lookup_benches!("hashbrown", HashbrownHashMap<u64, u64, SipHashBuilder>);
        lookup_benches!("std", StdHashMap<u64, u64, SipHashBuilder>);
    }

    group.finish();
}

fn bench_remove_half(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_half");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));
    let hash_builder = SipHashBuilder::from_os_rng();

    for &size in SIZES {
        let keys = shuffled_keys(size);
        group.throughput(Throughput::Elements(size as u64 / 2));

        macro_rules! remove_bench {
            ($name:literal, $map_type:ty) => {
                group.bench_function(format!("{}/{size}", $name), |b| {
                    b.iter_batched(
                        || build_map::<$map_type>(hash_builder, &keys),
                        |mut map| {
                            for key in &keys[..keys.len() / 2] {
                                black_box(map.remove_key(key));
                            }
                            black_box(&map);
                        },
                        BatchSize::SmallInput,
                    )
                });
            };
        }

        remove_bench!("robin_map", RobinHashMap<u64, u64, SipHashBuilder>);
        remove_bench!("hashbrown", HashbrownHashMap<u64, u64, SipHashBuilder>);
        remove_bench!("std", StdHashMap<u64, u64, SipHashBuilder>);
    }

    group.finish();
}

fn bench_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("churn");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));
    let hash_builder = SipHashBuilder::from_os_rng();

    for &size in SIZES {
        let keys = shuffled_keys(size);
        group.throughput(Throughput::Elements(size as u64));

        macro_rules! churn_bench {
            ($name:literal, $map_type:ty) => {
                group.bench_function(format!("{}/{size}", $name), |b| {
                    b.iter_batched(
                        || build_map::<$map_type>(hash_builder, &keys),
                        |mut map| {
                            // Remove and reinsert every key, keeping the
                            // population steady while forcing shifts.
                            for &key in &keys {
                                black_box(map.remove_key(&key));
                                map.insert_pair(key ^ (1 << 40), key);
                            }
                            black_box(&map);
                        },
                        BatchSize::SmallInput,
                    )
                });
            };
        }

        churn_bench!("robin_map", RobinHashMap<u64, u64, SipHashBuilder>);
        churn_bench!("hashbrown", HashbrownHashMap<u64, u64, SipHashBuilder>);
        churn_bench!("std", StdHashMap<u64, u64, SipHashBuilder>);
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insert_random,
    bench_lookup,
    bench_remove_half,
    bench_churn
);
criterion_main!(benches);
