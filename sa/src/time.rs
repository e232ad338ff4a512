use std::sync::LazyLock;
use std::time::{Duration, Instant};

/// Process-wide reference point for log timestamps and run times
pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Iteration and wall-clock budget of a single search
#[derive(Debug, Clone, Copy)]
pub struct Budget {
    start: Instant,
    n_iterations: usize,
    time_limit: Option<Duration>,
}

impl Budget {
    pub fn new(n_iterations: usize, time_limit_sec: Option<f64>) -> Self {
        Self {
            start: Instant::now(),
            n_iterations,
            time_limit: time_limit_sec.map(Duration::from_secs_f64),
        }
    }

    /// Whether the search has to stop before performing iteration `iteration` (0-based).
    /// The clock is queried once per call.
    pub fn exhausted(&self, iteration: usize) -> bool {
        iteration >= self.n_iterations
            || self
                .time_limit
                .is_some_and(|limit| self.start.elapsed() >= limit)
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
