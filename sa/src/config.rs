use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use tierpack::neighbor::NeighborConfig;
use tierpack::util::PackConfig;

/// Construction heuristic used to create the initial solution
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub enum BuilderKind {
    /// Random permutation of all products, assigned to the container tier
    #[default]
    Random,
    /// Products sorted by descending weight, assigned to the pallet tier
    Greedy,
    /// First-fit-decreasing into pallet bins
    Placing,
    /// Assignment read from a JSON file, produced by an external (exact) solver
    External { path: PathBuf },
}

/// Configuration for the SA optimizer
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SAConfig {
    /// Seed for the PRNG. If undefined, the algorithm will run in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Heuristic which creates the starting point of the search
    pub builder: BuilderKind,
    /// Maximum number of iterations of the search
    pub n_iterations: usize,
    /// Wall-clock limit of the search in seconds. If undefined, only the iteration budget applies
    pub time_limit_sec: Option<f64>,
    /// Temperature at the first iteration, relative to the normalized energy
    pub initial_temperature: f64,
    /// Multiplicative cooling: `T <- T * (1 - decay)` after every iteration
    pub decay: f64,
    /// Energy reward per unit of weight slack
    pub weight_energy: f64,
    /// Energy reward per unit of volume slack
    pub volume_energy: f64,
    /// Consolidate every accepted neighbor before continuing from it
    pub consolidate_on_accept: bool,
    pub neighbor: NeighborConfig,
    pub pack: PackConfig,
    /// Number of independent runs (with consecutive seeds), the cheapest result is kept
    pub n_runs: usize,
    /// Number of iterations between two progress records
    pub log_interval: usize,
}

impl Default for SAConfig {
    fn default() -> Self {
        Self {
            prng_seed: Some(0),
            builder: BuilderKind::default(),
            n_iterations: 20_000,
            time_limit_sec: None,
            initial_temperature: 0.1,
            decay: 1e-4,
            weight_energy: 0.0,
            volume_energy: 0.0,
            consolidate_on_accept: true,
            neighbor: NeighborConfig::default(),
            pack: PackConfig::default(),
            n_runs: 1,
            log_interval: 1000,
        }
    }
}

impl SAConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.n_iterations > 0, "n_iterations should be positive");
        ensure!(
            (0.0..1.0).contains(&self.decay),
            "decay should be in [0, 1), got {}",
            self.decay
        );
        ensure!(
            self.initial_temperature.is_finite() && self.initial_temperature > 0.0,
            "initial_temperature should be a positive number, got {}",
            self.initial_temperature
        );
        ensure!(
            self.weight_energy.is_finite() && self.volume_energy.is_finite(),
            "energy weights should be finite"
        );
        if let Some(limit) = self.time_limit_sec {
            ensure!(
                limit > 0.0 && Duration::try_from_secs_f64(limit).is_ok(),
                "time_limit_sec should be a positive number of seconds representable as a duration, got {limit}"
            );
        }
        ensure!(
            (0.0..=1.0).contains(&self.neighbor.swap_probability),
            "swap_probability should be in [0, 1], got {}",
            self.neighbor.swap_probability
        );
        ensure!(self.n_runs >= 1, "n_runs should be at least 1");
        ensure!(self.log_interval > 0, "log_interval should be positive");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SAConfig::default().validate().is_ok());
    }

    #[test]
    fn invalid_budget_and_decay_are_rejected() {
        let mut config = SAConfig {
            n_iterations: 0,
            ..SAConfig::default()
        };
        assert!(config.validate().is_err());

        config.n_iterations = 10;
        config.decay = 1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn unrepresentable_time_limit_is_rejected() {
        for limit in [1e20, f64::INFINITY, f64::NAN, 0.0, -1.0] {
            let config = SAConfig {
                time_limit_sec: Some(limit),
                ..SAConfig::default()
            };
            assert!(config.validate().is_err(), "time limit {limit} should be rejected");
        }
        let config = SAConfig {
            time_limit_sec: Some(30.0),
            ..SAConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = SAConfig {
            builder: BuilderKind::External {
                path: PathBuf::from("assignment.json"),
            },
            time_limit_sec: Some(2.5),
            ..SAConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: SAConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
