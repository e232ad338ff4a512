use std::fmt::{Display, Formatter};
use std::sync::Arc;

use itertools::Itertools;

use crate::entities::{Capacity, FilledBin, Instance};
use crate::packing::fill;
use crate::util::assertions::assignment_is_complete;

/// Assignment of every product of an [`Instance`] to exactly one [`Capacity`] class.
///
/// The order of the products within a class matters: it is the loading order used by the
/// [packing engine](crate::packing::fill) to derive the bins of that class.
/// All derived state (bins, price, slack) is computed when the solution is created,
/// every modification produces a new `Solution`.
#[derive(Debug, Clone)]
pub struct Solution {
    instance: Arc<Instance>,
    /// Product ids assigned to each capacity class, in loading order
    assignment: Vec<Vec<usize>>,
    /// Filled bins of each capacity class
    bins: Vec<Vec<FilledBin>>,
    price: f64,
    weight_left: f64,
    volume_left: f64,
}

impl Solution {
    /// Creates a solution from a per-class assignment and computes all derived state.
    pub fn with_assignment(instance: Arc<Instance>, assignment: Vec<Vec<usize>>) -> Self {
        assert_eq!(
            assignment.len(),
            instance.n_capacities(),
            "assignment should contain one product list per capacity class"
        );
        debug_assert!(assignment_is_complete(&instance, &assignment));

        let bins = instance
            .capacities
            .iter()
            .zip(assignment.iter())
            .map(|(capacity, order)| fill(capacity, &instance.products, order))
            .collect_vec();

        let price = instance
            .capacities
            .iter()
            .zip(bins.iter())
            .map(|(capacity, c_bins)| c_bins.len() as f64 * capacity.price)
            .sum();

        let exponent = instance.config.slack_exponent;
        let weight_left = slack(&instance.capacities, &bins, exponent, |c| c.weight, |b| b.weight);
        let volume_left = slack(&instance.capacities, &bins, exponent, |c| c.volume, |b| b.volume);

        Self {
            instance,
            assignment,
            bins,
            price,
            weight_left,
            volume_left,
        }
    }

    /// Creates a solution in which all products are loaded into class `capacity_id`, in the given order.
    pub fn single_class(instance: Arc<Instance>, capacity_id: usize, order: Vec<usize>) -> Self {
        let mut assignment = vec![vec![]; instance.n_capacities()];
        assignment[capacity_id] = order;
        Self::with_assignment(instance, assignment)
    }

    pub fn instance(&self) -> &Arc<Instance> {
        &self.instance
    }

    /// Product ids assigned to each capacity class, in loading order
    pub fn assignment(&self) -> &[Vec<usize>] {
        &self.assignment
    }

    pub fn products_of(&self, capacity_id: usize) -> &[usize] {
        &self.assignment[capacity_id]
    }

    /// Filled bins of each capacity class
    pub fn bins(&self) -> &[Vec<FilledBin>] {
        &self.bins
    }

    pub fn bins_of(&self, capacity_id: usize) -> &[FilledBin] {
        &self.bins[capacity_id]
    }

    /// Number of bins used for each capacity class
    pub fn bin_counts(&self) -> Vec<usize> {
        self.bins.iter().map(|c_bins| c_bins.len()).collect()
    }

    pub fn n_bins(&self) -> usize {
        self.bins.iter().map(|c_bins| c_bins.len()).sum()
    }

    /// Total price of all bins in use
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Normalized weight slack penalty, see [`slack`]
    pub fn weight_left(&self) -> f64 {
        self.weight_left
    }

    /// Normalized volume slack penalty, see [`slack`]
    pub fn volume_left(&self) -> f64 {
        self.volume_left
    }

    /// True if every bin of every class respects the weight and volume limits of its class
    pub fn is_valid(&self) -> bool {
        self.instance
            .capacities
            .iter()
            .zip(self.bins.iter())
            .all(|(capacity, c_bins)| c_bins.iter().all(|b| b.is_valid(capacity)))
    }

    /// Loaded weight of every bin, per capacity class
    pub fn contents_weights(&self) -> Vec<Vec<f64>> {
        self.bins
            .iter()
            .map(|c_bins| c_bins.iter().map(|b| b.weight).collect())
            .collect()
    }

    /// Loaded volume of every bin, per capacity class
    pub fn contents_volumes(&self) -> Vec<Vec<f64>> {
        self.bins
            .iter()
            .map(|c_bins| c_bins.iter().map(|b| b.volume).collect())
            .collect()
    }

    /// Id of the capacity class `product_id` is assigned to
    pub fn capacity_of(&self, product_id: usize) -> Option<usize> {
        self.assignment
            .iter()
            .position(|products| products.contains(&product_id))
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let usage = self
            .instance
            .capacities
            .iter()
            .zip(self.bins.iter())
            .map(|(capacity, c_bins)| format!("({}, {})", capacity.name, c_bins.len()))
            .join(", ");
        write!(f, "{} [{}]", self.price, usage)
    }
}

/// Slack of all bins, summed over the classes:
/// every non-trailing bin contributes its remaining capacity, the trailing bin of a class its used capacity,
/// each raised to `exponent`. The sum is normalized by the smallest class limit raised to `exponent`.
///
/// Large values are reached when full bins are followed by an (almost) empty or (almost) full trailing bin.
fn slack(
    capacities: &[Capacity],
    bins: &[Vec<FilledBin>],
    exponent: i32,
    limit: impl Fn(&Capacity) -> f64,
    used: impl Fn(&FilledBin) -> f64,
) -> f64 {
    let normalizer = capacities
        .iter()
        .map(&limit)
        .fold(f64::INFINITY, f64::min)
        .powi(exponent);

    if normalizer == 0.0 || !normalizer.is_finite() {
        return 0.0;
    }

    let total: f64 = capacities
        .iter()
        .zip(bins.iter())
        .filter_map(|(capacity, c_bins)| {
            let (trailing, full) = c_bins.split_last()?;
            let remaining: f64 = full
                .iter()
                .map(|b| (limit(capacity) - used(b)).powi(exponent))
                .sum();
            Some(remaining + used(trailing).powi(exponent))
        })
        .sum();

    total / normalizer
}
