#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::Arc;

    use rand::SeedableRng;
    use rand::prelude::SmallRng;
    use test_case::test_case;

    use sa::builders::{Builder, ExternalBuilder, GreedyBuilder, PlacingBuilder, RandomBuilder};
    use sa::config::{BuilderKind, SAConfig};
    use sa::io::read_instance;
    use sa::opt::annealing::SAOptimizer;
    use sa::opt::multi_start::multi_start;
    use sa::opt::observer::{IterationMetrics, SearchObserver};
    use tierpack::entities::{Instance, Solution};
    use tierpack::io::export::export_assignment;
    use tierpack::io::ext_repr::ExtAssignment;
    use tierpack::io::import::import;
    use tierpack::util::PackConfig;
    use tierpack::util::assertions::assignment_is_complete;

    const N_ITERATIONS: usize = 2_000;

    fn load(path: &str) -> Arc<Instance> {
        let _ = env_logger::builder().is_test(true).try_init();
        let ext_instance = read_instance(Path::new(path)).unwrap();
        Arc::new(import(&ext_instance, PackConfig::default()).unwrap())
    }

    fn config(builder: BuilderKind) -> SAConfig {
        SAConfig {
            builder,
            n_iterations: N_ITERATIONS,
            ..SAConfig::default()
        }
    }

    #[derive(Default)]
    struct Recorder {
        metrics: Vec<IterationMetrics>,
        n_improvements: usize,
    }

    impl SearchObserver for Recorder {
        fn on_iteration(&mut self, metrics: &IterationMetrics) {
            self.metrics.push(*metrics);
        }

        fn on_improvement(&mut self, _best: &Solution) {
            self.n_improvements += 1;
        }
    }

    #[test_case("../assets/warehouse60.json", BuilderKind::Random; "json random")]
    #[test_case("../assets/warehouse60.json", BuilderKind::Greedy; "json greedy")]
    #[test_case("../assets/warehouse60.json", BuilderKind::Placing; "json placing")]
    #[test_case("../assets/depot", BuilderKind::Random; "csv random")]
    #[test_case("../assets/depot", BuilderKind::Placing; "csv placing")]
    fn test_instance(instance_path: &str, builder: BuilderKind) {
        let instance = load(instance_path);
        let config = config(builder);

        let mut optimizer = SAOptimizer::new(instance.clone(), config, SmallRng::seed_from_u64(0)).unwrap();
        let mut recorder = Recorder::default();
        let best = optimizer.solve_with(&mut recorder);

        assert!(assignment_is_complete(&instance, best.assignment()));
        assert!(best.is_valid());
        assert_eq!(recorder.metrics.len(), N_ITERATIONS);

        // the best price never increases and starts from the consolidated initial solution
        let best_prices = recorder.metrics.iter().map(|m| m.best_price).collect::<Vec<_>>();
        assert!(best_prices.windows(2).all(|w| w[1] <= w[0]));
        assert_eq!(best_prices.last().copied(), Some(best.price()));

        // improvements are always accepted
        assert!(
            recorder
                .metrics
                .iter()
                .filter(|m| m.acceptance_probability == 1.0)
                .all(|m| m.accepted)
        );
    }

    #[test_case(|_| Box::new(RandomBuilder::default()); "random")]
    #[test_case(|_| Box::new(GreedyBuilder::default()); "greedy")]
    #[test_case(|_| Box::new(PlacingBuilder::default()); "placing")]
    #[test_case(|instance| Box::new(ExternalBuilder::new(instance, &ExtAssignment { tiers: vec![] }).unwrap()); "external")]
    fn empty_instance(make_builder: fn(&Instance) -> Box<dyn Builder + Send + Sync>) {
        let instance = Arc::new(load("../assets/depot").truncated(0.0));
        assert_eq!(instance.n_products(), 0);

        let builder = make_builder(&instance);
        let built = builder.build(&instance, &mut SmallRng::seed_from_u64(0));
        assert_eq!(built.price(), 0.0);
        assert!(built.is_valid());

        let mut optimizer = SAOptimizer::with_builder(
            instance,
            config(BuilderKind::Random),
            SmallRng::seed_from_u64(0),
            builder,
        )
        .unwrap();
        let best = optimizer.solve();
        assert_eq!(best.price(), 0.0);
        assert_eq!(best.n_bins(), 0);
    }

    #[test_case(0; "seed 0")]
    #[test_case(42; "seed 42")]
    fn longer_search_is_never_worse(seed: u64) {
        let instance = load("../assets/warehouse60.json");
        let short = {
            let mut optimizer = SAOptimizer::new(instance.clone(), config(BuilderKind::Random), SmallRng::seed_from_u64(seed)).unwrap();
            optimizer.solve()
        };
        let long = {
            let config = SAConfig {
                n_iterations: 3 * N_ITERATIONS,
                ..config(BuilderKind::Random)
            };
            let mut optimizer = SAOptimizer::new(instance.clone(), config, SmallRng::seed_from_u64(seed)).unwrap();
            optimizer.solve()
        };
        assert!(long.price() <= short.price());
    }

    #[test]
    fn search_never_worsens_the_initial_solution() {
        let instance = load("../assets/warehouse60.json");
        let initial = GreedyBuilder::default()
            .build(&instance, &mut SmallRng::seed_from_u64(0))
            .optimize_capacities();

        let mut optimizer = SAOptimizer::new(instance, config(BuilderKind::Greedy), SmallRng::seed_from_u64(0)).unwrap();
        assert!(optimizer.solve().price() <= initial.price());
    }

    #[test]
    fn slack_rewards_shape_the_search() {
        let instance = load("../assets/warehouse60.json");
        let initial = RandomBuilder::default()
            .build(&instance, &mut SmallRng::seed_from_u64(0))
            .optimize_capacities();
        let config = SAConfig {
            weight_energy: 0.05,
            volume_energy: 0.05,
            ..config(BuilderKind::Random)
        };

        let mut optimizer = SAOptimizer::new(instance.clone(), config, SmallRng::seed_from_u64(0)).unwrap();
        let mut recorder = Recorder::default();
        let best = optimizer.solve_with(&mut recorder);

        assert!(assignment_is_complete(&instance, best.assignment()));
        assert!(best.is_valid());
        assert!(best.price() <= initial.price());
        // every non-empty solution has slack, so the rewards pull the energy below the normalized price
        assert!(
            recorder
                .metrics
                .iter()
                .all(|m| m.current_energy < m.current_price / initial.price())
        );
    }

    #[test]
    fn multi_start_keeps_the_cheapest_run() {
        let instance = load("../assets/depot");
        let config = SAConfig {
            prng_seed: Some(3),
            ..config(BuilderKind::Random)
        };

        let first_run = SAOptimizer::new(instance.clone(), config.clone(), SmallRng::seed_from_u64(3))
            .unwrap()
            .solve();
        let best = multi_start(instance.clone(), &config, 4).unwrap();

        assert!(best.price() <= first_run.price());
        assert!(assignment_is_complete(&instance, best.assignment()));
    }

    #[test]
    fn external_assignment_is_used_as_is() {
        let instance = load("../assets/depot");
        let placed = PlacingBuilder::default().build(&instance, &mut SmallRng::seed_from_u64(0));

        let builder = ExternalBuilder::new(&instance, &export_assignment(&placed)).unwrap();
        let rebuilt = builder.build(&instance, &mut SmallRng::seed_from_u64(1));

        assert_eq!(rebuilt.assignment(), placed.assignment());
        assert_eq!(rebuilt.price(), placed.price());
    }

    #[test]
    fn zero_iterations_are_rejected() {
        let instance = load("../assets/depot");
        let config = SAConfig {
            n_iterations: 0,
            ..SAConfig::default()
        };
        assert!(SAOptimizer::new(instance, config, SmallRng::seed_from_u64(0)).is_err());
    }
}
