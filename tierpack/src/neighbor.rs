use anyhow::{Context, Result};
use rand::Rng;
use rand::seq::{IndexedRandom, index};
use rand_distr::{Bernoulli, Distribution};
use serde::{Deserialize, Serialize};

use crate::entities::Solution;
use crate::util::assertions::{assignment_is_complete, is_single_move};

/// Which kinds of moves the neighborhood proposes
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NeighborMode {
    /// Swap two products within a class, or transfer one product to another class
    #[default]
    SwapOrTransfer,
    /// Always transfer one product between two distinct classes
    Transfer,
}

/// Configuration of the neighborhood move
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct NeighborConfig {
    pub mode: NeighborMode,
    /// Probability of a swap (instead of a transfer) when the selected class holds at least two products.
    /// Only used in [`NeighborMode::SwapOrTransfer`]
    pub swap_probability: f64,
}

impl Default for NeighborConfig {
    fn default() -> Self {
        Self {
            mode: NeighborMode::SwapOrTransfer,
            swap_probability: 0.5,
        }
    }
}

/// A single atomic edit of an assignment
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    /// Exchange the products at positions `i` and `j` in the loading order of class `capacity_id`
    Swap { capacity_id: usize, i: usize, j: usize },
    /// Remove the product at position `from_pos` of class `from` and insert it at position `to_pos` of class `to`
    Transfer {
        from: usize,
        from_pos: usize,
        to: usize,
        to_pos: usize,
    },
}

impl Move {
    pub fn apply(&self, assignment: &mut [Vec<usize>]) {
        match *self {
            Move::Swap { capacity_id, i, j } => assignment[capacity_id].swap(i, j),
            Move::Transfer {
                from,
                from_pos,
                to,
                to_pos,
            } => {
                let p_id = assignment[from].remove(from_pos);
                assignment[to].insert(to_pos, p_id);
            }
        }
    }
}

/// Samples random [`Move`]s for a [`Solution`].
#[derive(Clone, Debug)]
pub struct NeighborSampler {
    mode: NeighborMode,
    swap_distr: Bernoulli,
}

impl NeighborSampler {
    pub fn new(config: NeighborConfig) -> Result<Self> {
        let swap_distr = Bernoulli::new(config.swap_probability).with_context(|| {
            format!(
                "swap probability should be in [0, 1], got {}",
                config.swap_probability
            )
        })?;
        Ok(Self {
            mode: config.mode,
            swap_distr,
        })
    }

    /// Samples a move applicable to `assignment`.
    /// Returns `None` if no product can be moved (no products, or a single class).
    pub fn sample(&self, assignment: &[Vec<usize>], rng: &mut impl Rng) -> Option<Move> {
        let n_classes = assignment.len();
        let non_empty = (0..n_classes)
            .filter(|&c| !assignment[c].is_empty())
            .collect::<Vec<_>>();
        let &from = non_empty.choose(rng)?;
        let from_len = assignment[from].len();

        let swap = match self.mode {
            NeighborMode::SwapOrTransfer => from_len >= 2 && self.swap_distr.sample(rng),
            NeighborMode::Transfer => false,
        };

        if swap || n_classes < 2 {
            if from_len < 2 {
                return None;
            }
            let positions = index::sample(rng, from_len, 2);
            return Some(Move::Swap {
                capacity_id: from,
                i: positions.index(0),
                j: positions.index(1),
            });
        }

        //uniformly select one of the other classes
        let to = match rng.random_range(0..n_classes - 1) {
            c if c >= from => c + 1,
            c => c,
        };
        Some(Move::Transfer {
            from,
            from_pos: rng.random_range(0..from_len),
            to,
            to_pos: rng.random_range(0..=assignment[to].len()),
        })
    }
}

impl Solution {
    /// Returns a copy of the solution perturbed by a single random [`Move`].
    /// The solution itself is left untouched.
    pub fn neighbor(&self, sampler: &NeighborSampler, rng: &mut impl Rng) -> Solution {
        let mut assignment = self.assignment().to_vec();
        match sampler.sample(&assignment, rng) {
            Some(mv) => mv.apply(&mut assignment),
            None => return self.clone(),
        }

        debug_assert!(assignment_is_complete(self.instance(), &assignment));
        debug_assert!(is_single_move(self.assignment(), &assignment));

        Solution::with_assignment(self.instance().clone(), assignment)
    }
}
