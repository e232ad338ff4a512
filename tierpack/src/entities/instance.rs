use crate::entities::{CONTAINER, Capacity, PALLET, Product};
use crate::util::PackConfig;
use crate::util::assertions::instance_product_capacity_ids_correct;

/// Instance of the two-tier assignment problem: a set of products to be shipped
/// in bins of either the pallet or the container class.
#[derive(Debug, Clone)]
pub struct Instance {
    /// The products to be shipped, indexed by their id
    pub products: Vec<Product>,
    /// The two capacity classes, indexed by their id ([`PALLET`], [`CONTAINER`])
    pub capacities: Vec<Capacity>,
    /// Tuning constants of the packing logic
    pub config: PackConfig,
}

impl Instance {
    pub fn new(products: Vec<Product>, capacities: Vec<Capacity>, config: PackConfig) -> Self {
        assert_eq!(
            capacities.len(),
            2,
            "an instance requires exactly two capacity classes (pallet and container)"
        );
        assert!(instance_product_capacity_ids_correct(&products, &capacities));

        Self {
            products,
            capacities,
            config,
        }
    }

    /// Returns a copy of the instance which only contains the first `ceil(n * fraction)` products.
    pub fn truncated(&self, fraction: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&fraction),
            "fraction should be in [0, 1], got {fraction}"
        );
        let n_products = ((self.n_products() as f64) * fraction).ceil() as usize;
        let products = self.products[..n_products.min(self.n_products())].to_vec();

        Instance::new(products, self.capacities.clone(), self.config)
    }

    pub fn product(&self, id: usize) -> &Product {
        &self.products[id]
    }

    pub fn capacity(&self, id: usize) -> &Capacity {
        &self.capacities[id]
    }

    pub fn pallet(&self) -> &Capacity {
        &self.capacities[PALLET]
    }

    pub fn container(&self) -> &Capacity {
        &self.capacities[CONTAINER]
    }

    pub fn n_products(&self) -> usize {
        self.products.len()
    }

    pub fn n_capacities(&self) -> usize {
        self.capacities.len()
    }

    pub fn total_weight(&self) -> f64 {
        self.products.iter().map(|p| p.weight).sum()
    }

    pub fn total_volume(&self) -> f64 {
        self.products.iter().map(|p| p.volume).sum()
    }
}
