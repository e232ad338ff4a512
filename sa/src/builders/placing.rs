use std::sync::Arc;

use itertools::Itertools;
use log::debug;
use rand::prelude::SmallRng;

use tierpack::entities::{FilledBin, Instance, PALLET, Solution};

use crate::builders::{Builder, descending_weight_order};

/// First-fit-decreasing (by weight) into the bins of a single tier.
/// The contents of the bins are concatenated, in bin order, into the assignment of that tier.
#[derive(Debug, Clone, Copy)]
pub struct PlacingBuilder {
    pub target: usize,
}

impl Default for PlacingBuilder {
    fn default() -> Self {
        Self { target: PALLET }
    }
}

impl Builder for PlacingBuilder {
    fn build(&self, instance: &Arc<Instance>, _rng: &mut SmallRng) -> Solution {
        let capacity = instance.capacity(self.target);
        let mut bins: Vec<FilledBin> = vec![];

        for p_id in descending_weight_order(instance) {
            let product = instance.product(p_id);
            match bins.iter_mut().find(|b| b.can_take(capacity, product)) {
                Some(bin) => bin.load(product),
                None => {
                    let mut bin = FilledBin::new(self.target);
                    bin.load(product);
                    bins.push(bin);
                }
            }
        }
        debug!("[BUILD] first-fit opened {} {} bins", bins.len(), capacity);

        let order = bins.into_iter().flat_map(|b| b.products).collect_vec();
        Solution::single_class(instance.clone(), self.target, order)
    }
}
