use std::cmp::Reverse;
use std::sync::Arc;

use anyhow::Result;
use itertools::Itertools;
use ordered_float::NotNan;
use rand::prelude::SmallRng;

use tierpack::entities::{Instance, Solution};

use crate::config::BuilderKind;
use crate::io::read_assignment;

mod external;
mod greedy;
mod placing;
mod random;

#[doc(inline)]
pub use external::ExternalBuilder;
#[doc(inline)]
pub use greedy::GreedyBuilder;
#[doc(inline)]
pub use placing::PlacingBuilder;
#[doc(inline)]
pub use random::RandomBuilder;

/// Construction heuristic producing a complete (not necessarily cheap) solution
pub trait Builder {
    fn build(&self, instance: &Arc<Instance>, rng: &mut SmallRng) -> Solution;
}

/// Creates the builder selected in the configuration.
/// An [`BuilderKind::External`] assignment is read and checked against `instance` here.
pub fn create_builder(kind: &BuilderKind, instance: &Instance) -> Result<Box<dyn Builder + Send + Sync>> {
    let builder: Box<dyn Builder + Send + Sync> = match kind {
        BuilderKind::Random => Box::new(RandomBuilder::default()),
        BuilderKind::Greedy => Box::new(GreedyBuilder::default()),
        BuilderKind::Placing => Box::new(PlacingBuilder::default()),
        BuilderKind::External { path } => {
            let ext_assignment = read_assignment(path)?;
            Box::new(ExternalBuilder::new(instance, &ext_assignment)?)
        }
    };
    Ok(builder)
}

/// Product ids sorted by descending weight, ties are kept in id order
pub fn descending_weight_order(instance: &Instance) -> Vec<usize> {
    (0..instance.n_products())
        .sorted_by_cached_key(|&p_id| {
            let weight = NotNan::new(instance.product(p_id).weight).expect("product weight is NaN");
            Reverse(weight)
        })
        .collect_vec()
}
