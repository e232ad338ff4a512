use std::sync::Arc;

use rand::prelude::SmallRng;

use tierpack::entities::{Instance, PALLET, Solution};

use crate::builders::{Builder, descending_weight_order};

/// Assigns all products, heaviest first, to a single tier
#[derive(Debug, Clone, Copy)]
pub struct GreedyBuilder {
    pub target: usize,
}

impl Default for GreedyBuilder {
    fn default() -> Self {
        Self { target: PALLET }
    }
}

impl Builder for GreedyBuilder {
    fn build(&self, instance: &Arc<Instance>, _rng: &mut SmallRng) -> Solution {
        Solution::single_class(instance.clone(), self.target, descending_weight_order(instance))
    }
}
