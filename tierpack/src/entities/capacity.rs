use std::fmt::{Display, Formatter};

use crate::entities::Product;

/// Id of the small tier (pallet) in every [`Instance`](crate::entities::Instance)
pub const PALLET: usize = 0;

/// Id of the large tier (container) in every [`Instance`](crate::entities::Instance)
pub const CONTAINER: usize = 1;

/// A class of shipping capacity, every bin of this class shares its limits and price.
#[derive(Clone, Debug, PartialEq)]
pub struct Capacity {
    /// Unique identifier of the class, [`PALLET`] or [`CONTAINER`]
    pub id: usize,
    pub name: String,
    /// Maximum total weight a single bin of this class can hold
    pub weight: f64,
    /// Maximum total volume a single bin of this class can hold
    pub volume: f64,
    /// The cost of using one bin of this class
    pub price: f64,
}

impl Capacity {
    pub fn new(id: usize, name: impl Into<String>, weight: f64, volume: f64, price: f64) -> Self {
        assert!(
            weight >= 0.0 && volume >= 0.0 && price >= 0.0,
            "capacity {id} has a negative limit or price"
        );
        Self {
            id,
            name: name.into(),
            weight,
            volume,
            price,
        }
    }

    /// Whether a load of `weight` and `volume` respects both limits of the class.
    /// Reaching a limit exactly is allowed.
    pub fn admits(&self, weight: f64, volume: f64) -> bool {
        weight <= self.weight && volume <= self.volume
    }

    /// Whether `product` fits in an empty bin of this class
    pub fn fits_alone(&self, product: &Product) -> bool {
        self.admits(product.weight, product.volume)
    }
}

impl Display for Capacity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
