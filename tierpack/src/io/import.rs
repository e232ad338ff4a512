use std::collections::HashMap;

use anyhow::{Context, Result, bail, ensure};
use itertools::Itertools;
use log::warn;

use crate::entities::{Capacity, Instance, Product};
use crate::io::ext_repr::{ExtAssignment, ExtCapacity, ExtInstance, ExtProduct};
use crate::util::PackConfig;
use crate::util::assertions::assignment_is_complete;

/// Imports an instance into the library.
///
/// Products receive consecutive ids in the order in which they are listed.
/// The capacity class with the smallest weight limit becomes the pallet, the other one the container.
pub fn import(ext_instance: &ExtInstance, config: PackConfig) -> Result<Instance> {
    ensure!(
        ext_instance.capacities.len() == 2,
        "instance {:?} should define exactly two capacity classes (pallet and container), found {}",
        ext_instance.name,
        ext_instance.capacities.len()
    );

    let products = ext_instance
        .products
        .iter()
        .enumerate()
        .map(|(id, ext_product)| import_product(id, ext_product))
        .collect::<Result<Vec<Product>>>()?;

    let capacities = ext_instance
        .capacities
        .iter()
        .sorted_by(|a, b| a.weight.total_cmp(&b.weight))
        .enumerate()
        .map(|(id, ext_capacity)| import_capacity(id, ext_capacity))
        .collect::<Result<Vec<Capacity>>>()?;

    for product in products
        .iter()
        .filter(|p| !capacities.iter().any(|c| c.fits_alone(p)))
    {
        warn!(
            "product {} (weight: {}, volume: {}) does not fit in any capacity class",
            product.name, product.weight, product.volume
        );
    }

    Ok(Instance::new(products, capacities, config))
}

fn import_product(id: usize, ext_product: &ExtProduct) -> Result<Product> {
    let ExtProduct {
        name,
        weight,
        volume,
    } = ext_product;
    ensure_non_negative("weight", name, *weight)?;
    ensure_non_negative("volume", name, *volume)?;
    Ok(Product::new(id, name.clone(), *weight, *volume))
}

fn import_capacity(id: usize, ext_capacity: &ExtCapacity) -> Result<Capacity> {
    let ExtCapacity {
        name,
        weight,
        volume,
        price,
    } = ext_capacity;
    ensure_non_negative("weight", name, *weight)?;
    ensure_non_negative("volume", name, *volume)?;
    ensure_non_negative("price", name, *price)?;
    Ok(Capacity::new(id, name.clone(), *weight, *volume, *price))
}

fn ensure_non_negative(field: &str, name: &str, value: f64) -> Result<()> {
    ensure!(
        value.is_finite() && value >= 0.0,
        "{field} of {name:?} should be a finite non-negative number, got {value}"
    );
    Ok(())
}

/// Converts an externally produced assignment into per-class product id lists for `instance`.
/// Every product of the instance must be assigned exactly once.
pub fn import_assignment(instance: &Instance, ext_assignment: &ExtAssignment) -> Result<Vec<Vec<usize>>> {
    let product_ids = name_index(instance.products.iter().map(|p| p.name.as_str()))
        .context("products should have unique names to import an assignment")?;
    let capacity_ids = name_index(instance.capacities.iter().map(|c| c.name.as_str()))
        .context("capacity classes should have unique names to import an assignment")?;

    let mut assignment = vec![vec![]; instance.n_capacities()];
    for tier in &ext_assignment.tiers {
        let Some(&c_id) = capacity_ids.get(tier.capacity.as_str()) else {
            bail!("unknown capacity class {:?} in assignment", tier.capacity);
        };
        for name in &tier.products {
            let Some(&p_id) = product_ids.get(name.as_str()) else {
                bail!("unknown product {name:?} in assignment");
            };
            assignment[c_id].push(p_id);
        }
    }

    ensure!(
        assignment_is_complete(instance, &assignment),
        "assignment should contain every product of the instance exactly once"
    );
    Ok(assignment)
}

fn name_index<'a>(names: impl Iterator<Item = &'a str>) -> Result<HashMap<&'a str, usize>> {
    let mut index = HashMap::new();
    for (id, name) in names.enumerate() {
        if index.insert(name, id).is_some() {
            bail!("duplicate name {name:?}");
        }
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{CONTAINER, PALLET};
    use crate::io::ext_repr::ExtTierAssignment;

    fn ext_instance() -> ExtInstance {
        ExtInstance {
            name: "test".to_string(),
            products: vec![
                ExtProduct {
                    name: "a".to_string(),
                    weight: 3.0,
                    volume: 1.0,
                },
                ExtProduct {
                    name: "b".to_string(),
                    weight: 5.0,
                    volume: 2.0,
                },
            ],
            capacities: vec![
                ExtCapacity {
                    name: "container".to_string(),
                    weight: 1000.0,
                    volume: 50.0,
                    price: 900.0,
                },
                ExtCapacity {
                    name: "pallet".to_string(),
                    weight: 100.0,
                    volume: 2.0,
                    price: 200.0,
                },
            ],
        }
    }

    #[test]
    fn capacities_are_ordered_by_weight_limit() {
        let instance = import(&ext_instance(), PackConfig::default()).unwrap();

        assert_eq!(instance.capacity(PALLET).name, "pallet");
        assert_eq!(instance.capacity(CONTAINER).name, "container");
        assert_eq!(instance.product(1).name, "b");
    }

    #[test]
    fn negative_weight_is_rejected() {
        let mut ext = ext_instance();
        ext.products[0].weight = -1.0;
        let err = import(&ext, PackConfig::default()).unwrap_err();
        assert!(err.to_string().contains("\"a\""));
    }

    #[test]
    fn three_capacities_are_rejected() {
        let mut ext = ext_instance();
        ext.capacities.push(ext.capacities[0].clone());
        assert!(import(&ext, PackConfig::default()).is_err());
    }

    #[test]
    fn assignment_is_resolved_by_name() {
        let instance = import(&ext_instance(), PackConfig::default()).unwrap();
        let ext_assignment = ExtAssignment {
            tiers: vec![ExtTierAssignment {
                capacity: "pallet".to_string(),
                products: vec!["b".to_string(), "a".to_string()],
            }],
        };

        let assignment = import_assignment(&instance, &ext_assignment).unwrap();

        assert_eq!(assignment[PALLET], vec![1, 0]);
        assert!(assignment[CONTAINER].is_empty());
    }

    #[test]
    fn incomplete_assignment_is_rejected() {
        let instance = import(&ext_instance(), PackConfig::default()).unwrap();
        let ext_assignment = ExtAssignment {
            tiers: vec![ExtTierAssignment {
                capacity: "container".to_string(),
                products: vec!["a".to_string(), "a".to_string()],
            }],
        };

        assert!(import_assignment(&instance, &ext_assignment).is_err());
    }
}
