use serde::{Deserialize, Serialize};

/// External representation of a [`Product`](crate::entities::Product).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtProduct {
    /// Unique name of the product
    pub name: String,
    pub weight: f64,
    pub volume: f64,
}

/// External representation of a [`Capacity`](crate::entities::Capacity) class.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtCapacity {
    /// Unique name of the class
    pub name: String,
    /// Weight limit of a single bin
    pub weight: f64,
    /// Volume limit of a single bin
    pub volume: f64,
    /// The cost of using a single bin of this class
    pub price: f64,
}

/// Two-tier product assignment instance
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    /// Products to be shipped
    pub products: Vec<ExtProduct>,
    /// The two capacity classes, in any order
    pub capacities: Vec<ExtCapacity>,
}

/// A single filled bin
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtBin {
    /// Names of the loaded products, in loading order
    pub products: Vec<String>,
    /// Total weight of the loaded products
    pub weight: f64,
    /// Total volume of the loaded products
    pub volume: f64,
}

/// All bins of a capacity class
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtTier {
    /// Name of the capacity class
    pub capacity: String,
    pub bins: Vec<ExtBin>,
}

/// Two-tier product assignment solution
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    /// Total price of all bins used in the solution
    pub price: f64,
    /// Whether every bin respects the limits of its class
    pub valid: bool,
    /// Bins per capacity class
    pub tiers: Vec<ExtTier>,
    /// The time it took to generate the solution in seconds
    pub run_time_sec: f64,
}

/// Products assigned to a capacity class, in loading order
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtTierAssignment {
    /// Name of the capacity class
    pub capacity: String,
    /// Names of the products
    pub products: Vec<String>,
}

/// An assignment produced outside of this library (by an exact solver for example).
/// Classes which are not listed receive no products.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtAssignment {
    pub tiers: Vec<ExtTierAssignment>,
}
