use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// Product to be shipped.
/// Two products are equal if they share the same `id`, regardless of their other attributes.
#[derive(Clone, Debug)]
pub struct Product {
    /// Index of the product in its [`Instance`](crate::entities::Instance)
    pub id: usize,
    pub name: String,
    pub weight: f64,
    pub volume: f64,
}

impl Product {
    pub fn new(id: usize, name: impl Into<String>, weight: f64, volume: f64) -> Self {
        assert!(
            weight >= 0.0 && volume >= 0.0,
            "product {id} has a negative weight ({weight}) or volume ({volume})"
        );
        Self {
            id,
            name: name.into(),
            weight,
            volume,
        }
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for Product {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
