use std::sync::Arc;

use anyhow::Result;
use rand::prelude::SmallRng;

use tierpack::entities::{Instance, Solution};
use tierpack::io::ext_repr::ExtAssignment;
use tierpack::io::import::import_assignment;

use crate::builders::Builder;

/// Starts from an assignment computed outside of this crate (by an exact solver for example)
#[derive(Debug, Clone)]
pub struct ExternalBuilder {
    assignment: Vec<Vec<usize>>,
}

impl ExternalBuilder {
    /// Fails if the assignment refers to unknown names or does not contain every product exactly once
    pub fn new(instance: &Instance, ext_assignment: &ExtAssignment) -> Result<Self> {
        let assignment = import_assignment(instance, ext_assignment)?;
        Ok(Self { assignment })
    }
}

impl Builder for ExternalBuilder {
    fn build(&self, instance: &Arc<Instance>, _rng: &mut SmallRng) -> Solution {
        assert_eq!(self.assignment.len(), instance.n_capacities());
        Solution::with_assignment(instance.clone(), self.assignment.clone())
    }
}
