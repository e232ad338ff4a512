use crate::entities::{Capacity, Product};

/// A single physical bin of a [`Capacity`] class and the products loaded in it, in loading order.
#[derive(Clone, Debug, PartialEq)]
pub struct FilledBin {
    /// Id of the [`Capacity`] class of the bin
    pub capacity_id: usize,
    /// Ids of the loaded products
    pub products: Vec<usize>,
    /// Sum of the weights of the loaded products
    pub weight: f64,
    /// Sum of the volumes of the loaded products
    pub volume: f64,
}

impl FilledBin {
    pub fn new(capacity_id: usize) -> Self {
        Self {
            capacity_id,
            products: vec![],
            weight: 0.0,
            volume: 0.0,
        }
    }

    pub fn load(&mut self, product: &Product) {
        self.products.push(product.id);
        self.weight += product.weight;
        self.volume += product.volume;
    }

    /// Whether `product` can be added to the bin without exceeding the limits of `capacity`
    pub fn can_take(&self, capacity: &Capacity, product: &Product) -> bool {
        capacity.admits(self.weight + product.weight, self.volume + product.volume)
    }

    pub fn is_valid(&self, capacity: &Capacity) -> bool {
        capacity.admits(self.weight, self.volume)
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }
}
