use std::sync::Arc;

use rand::prelude::SmallRng;
use rand::seq::SliceRandom;

use tierpack::entities::{CONTAINER, Instance, Solution};

use crate::builders::Builder;

/// Assigns a random permutation of all products to a single tier
#[derive(Debug, Clone, Copy)]
pub struct RandomBuilder {
    pub target: usize,
}

impl Default for RandomBuilder {
    fn default() -> Self {
        Self { target: CONTAINER }
    }
}

impl Builder for RandomBuilder {
    fn build(&self, instance: &Arc<Instance>, rng: &mut SmallRng) -> Solution {
        let mut order = (0..instance.n_products()).collect::<Vec<_>>();
        order.shuffle(rng);
        Solution::single_class(instance.clone(), self.target, order)
    }
}
