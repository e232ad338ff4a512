use std::hint::black_box;
use std::path::Path;
use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::prelude::SmallRng;

use sa::builders::{Builder, RandomBuilder};
use sa::config::SAConfig;
use sa::io::read_instance;
use sa::opt::annealing::SAOptimizer;
use tierpack::entities::{Instance, PALLET};
use tierpack::io::import::import;
use tierpack::neighbor::NeighborSampler;
use tierpack::util::PackConfig;

criterion_main!(benches);
criterion_group!(benches, neighbor_bench, consolidation_bench, search_bench);

const INSTANCE_PATH: &str = "../assets/warehouse60.json";
const FRACTIONS: [f64; 3] = [0.25, 0.5, 1.0];

fn create_instance(fraction: f64) -> Arc<Instance> {
    let ext_instance = read_instance(Path::new(INSTANCE_PATH)).expect("could not read instance");
    let instance = import(&ext_instance, PackConfig::default()).expect("could not import instance");
    Arc::new(instance.truncated(fraction))
}

/// Proposing (and evaluating) a single neighbor
fn neighbor_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighbor");
    for fraction in FRACTIONS {
        let instance = create_instance(fraction);
        let mut rng = SmallRng::seed_from_u64(0);
        let sol = RandomBuilder::default().build(&instance, &mut rng);
        let sampler = NeighborSampler::new(Default::default()).unwrap();

        group.bench_function(BenchmarkId::from_parameter(instance.n_products()), |b| {
            b.iter(|| black_box(sol.neighbor(&sampler, &mut rng).price()))
        });
    }
    group.finish();
}

fn consolidation_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimize_capacities");
    for fraction in FRACTIONS {
        let instance = create_instance(fraction);
        let sol = RandomBuilder { target: PALLET }
            .build(&instance, &mut SmallRng::seed_from_u64(0));

        group.bench_function(BenchmarkId::from_parameter(instance.n_products()), |b| {
            b.iter(|| black_box(sol.optimize_capacities().price()))
        });
    }
    group.finish();
}

/// A complete, short search
fn search_bench(c: &mut Criterion) {
    let instance = create_instance(1.0);
    let config = SAConfig {
        n_iterations: 1_000,
        ..SAConfig::default()
    };

    c.bench_function("search_1k", |b| {
        b.iter(|| {
            let mut optimizer =
                SAOptimizer::new(instance.clone(), config.clone(), SmallRng::seed_from_u64(0)).unwrap();
            black_box(optimizer.solve().price())
        })
    });
}
