use log::{debug, info};
use thousands::Separable;

use tierpack::entities::Solution;

/// State of the search after a single iteration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationMetrics {
    pub iteration: usize,
    pub current_energy: f64,
    pub best_energy: f64,
    pub current_price: f64,
    pub best_price: f64,
    pub temperature: f64,
    /// Probability with which the proposed neighbor was accepted
    pub acceptance_probability: f64,
    pub accepted: bool,
}

/// Receives progress information from a running search
pub trait SearchObserver {
    fn on_iteration(&mut self, _metrics: &IterationMetrics) {}

    /// Called every time a strictly cheaper solution is found
    fn on_improvement(&mut self, _best: &Solution) {}
}

/// Ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Logs a progress record every `interval` iterations and every new best solution
#[derive(Debug, Clone, Copy)]
pub struct LogObserver {
    pub interval: usize,
}

impl LogObserver {
    pub fn new(interval: usize) -> Self {
        assert!(interval > 0);
        Self { interval }
    }
}

impl SearchObserver for LogObserver {
    fn on_iteration(&mut self, m: &IterationMetrics) {
        if m.iteration % self.interval == 0 {
            debug!(
                "[SA] it {:>8} | T: {:.3e} | E: {:.4} (best: {:.4}) | price: {} (best: {}) | p: {:.3}",
                m.iteration.separate_with_commas(),
                m.temperature,
                m.current_energy,
                m.best_energy,
                m.current_price,
                m.best_price,
                m.acceptance_probability
            );
        }
    }

    fn on_improvement(&mut self, best: &Solution) {
        info!("[SA] new best: {best}");
    }
}
