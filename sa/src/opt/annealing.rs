use std::sync::Arc;

use anyhow::{Result, ensure};
use log::info;
use rand::Rng;
use rand::prelude::SmallRng;
use thousands::Separable;

use tierpack::entities::{Instance, Solution};
use tierpack::neighbor::NeighborSampler;

use crate::builders::{Builder, create_builder};
use crate::config::SAConfig;
use crate::opt::observer::{IterationMetrics, NoopObserver, SearchObserver};
use crate::time::Budget;

/// Simulated Annealing optimizer for the two-tier product assignment problem.
///
/// Starts from the consolidated output of a [`Builder`] and repeatedly proposes a single
/// swap or transfer. Worse neighbors are accepted with a probability that decreases with
/// the temperature. The cheapest solution encountered is returned.
pub struct SAOptimizer {
    pub instance: Arc<Instance>,
    pub config: SAConfig,
    /// SmallRng is a fast, non-cryptographic PRNG <https://rust-random.github.io/book/guide-rngs.html>
    pub rng: SmallRng,
    builder: Box<dyn Builder + Send + Sync>,
    sampler: NeighborSampler,
}

impl SAOptimizer {
    /// Creates an optimizer with the builder selected in `config`
    pub fn new(instance: Arc<Instance>, config: SAConfig, rng: SmallRng) -> Result<Self> {
        let builder = create_builder(&config.builder, &instance)?;
        Self::with_builder(instance, config, rng, builder)
    }

    pub fn with_builder(
        instance: Arc<Instance>,
        config: SAConfig,
        rng: SmallRng,
        builder: Box<dyn Builder + Send + Sync>,
    ) -> Result<Self> {
        config.validate()?;
        ensure!(
            instance.config == config.pack,
            "instance was imported with {:?}, but the configuration specifies {:?}",
            instance.config,
            config.pack
        );
        let sampler = NeighborSampler::new(config.neighbor)?;
        Ok(Self {
            instance,
            config,
            rng,
            builder,
            sampler,
        })
    }

    pub fn solve(&mut self) -> Solution {
        self.solve_with(&mut NoopObserver)
    }

    pub fn solve_with(&mut self, observer: &mut impl SearchObserver) -> Solution {
        let budget = Budget::new(self.config.n_iterations, self.config.time_limit_sec);

        let initial = self.builder.build(&self.instance, &mut self.rng).optimize_capacities();
        info!("[SA] initial solution: {initial}");
        if self.instance.n_products() == 0 {
            return initial;
        }

        let energy = Energy::new(&self.config, initial.price());
        let mut current_e = energy.of(&initial);
        let mut current = initial;
        let mut best = current.clone();
        let mut best_e = current_e;
        let mut temperature = self.config.initial_temperature;

        let mut iteration = 0;
        let mut n_accepted: usize = 0;
        while !budget.exhausted(iteration) {
            let neighbor = current.neighbor(&self.sampler, &mut self.rng);
            let neighbor_e = energy.of(&neighbor);
            let p = acceptance_probability(current_e, neighbor_e, best_e, temperature);
            let accepted = self.rng.random::<f64>() <= p;

            if accepted {
                n_accepted += 1;
                current = match self.config.consolidate_on_accept {
                    true => neighbor.optimize_capacities(),
                    false => neighbor,
                };
                current_e = energy.of(&current);
                if current.price() < best.price() {
                    best = current.clone();
                    best_e = current_e;
                    observer.on_improvement(&best);
                }
            }

            observer.on_iteration(&IterationMetrics {
                iteration,
                current_energy: current_e,
                best_energy: best_e,
                current_price: current.price(),
                best_price: best.price(),
                temperature,
                acceptance_probability: p,
                accepted,
            });

            temperature *= 1.0 - self.config.decay;
            iteration += 1;
        }

        info!(
            "[SA] optimization finished in {:.3}ms ({} iterations, {} accepted)",
            budget.elapsed().as_secs_f64() * 1000.0,
            iteration.separate_with_commas(),
            n_accepted.separate_with_commas()
        );
        info!("[SA] best solution: {best}");
        best
    }
}

/// Objective minimized by the search: normalized price, minus optional rewards for slack
#[derive(Debug, Clone, Copy)]
pub struct Energy {
    norm: f64,
    weight_energy: f64,
    volume_energy: f64,
}

impl Energy {
    /// `reference_price` normalizes the price term, a zero price falls back to 1
    pub fn new(config: &SAConfig, reference_price: f64) -> Self {
        let norm = match reference_price > 0.0 {
            true => reference_price,
            false => 1.0,
        };
        Self {
            norm,
            weight_energy: config.weight_energy,
            volume_energy: config.volume_energy,
        }
    }

    pub fn of(&self, solution: &Solution) -> f64 {
        solution.price() / self.norm
            - self.weight_energy * solution.weight_left()
            - self.volume_energy * solution.volume_left()
    }
}

/// Metropolis-style acceptance probability of moving from `energy` to `neighbor_energy`.
/// The energy difference is scaled by the magnitude of the best energy found so far.
pub fn acceptance_probability(energy: f64, neighbor_energy: f64, best_energy: f64, temperature: f64) -> f64 {
    if neighbor_energy < energy || best_energy == 0.0 {
        1.0
    } else if temperature <= 0.0 {
        0.0
    } else {
        ((energy - neighbor_energy) / (best_energy.abs() * temperature)).exp()
    }
}
