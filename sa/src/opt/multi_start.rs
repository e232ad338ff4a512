use std::sync::Arc;

use anyhow::{Context, Result, ensure};
use log::info;
use rand::SeedableRng;
use rand::prelude::SmallRng;
use rayon::prelude::*;

use tierpack::entities::{Instance, Solution};

use crate::config::SAConfig;
use crate::opt::annealing::SAOptimizer;
use crate::opt::observer::LogObserver;

/// Runs `n_runs` independent searches in parallel and returns the cheapest solution.
///
/// Run `i` is seeded with `prng_seed + i`, so the result is reproducible when a seed is configured.
/// Ties are resolved in favor of the lowest run index.
pub fn multi_start(instance: Arc<Instance>, config: &SAConfig, n_runs: usize) -> Result<Solution> {
    ensure!(n_runs >= 1, "at least one run is required");

    let solutions = (0..n_runs)
        .into_par_iter()
        .map(|run| -> Result<Solution> {
            let rng = match config.prng_seed {
                Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(run as u64)),
                None => SmallRng::from_os_rng(),
            };
            let mut optimizer = SAOptimizer::new(instance.clone(), config.clone(), rng)?;
            let solution = optimizer.solve_with(&mut LogObserver::new(config.log_interval));
            info!("[MS] run {run} finished: {solution}");
            Ok(solution)
        })
        .collect::<Result<Vec<Solution>>>()?;

    solutions
        .into_iter()
        .min_by(|a, b| a.price().total_cmp(&b.price()))
        .context("no solutions")
}
