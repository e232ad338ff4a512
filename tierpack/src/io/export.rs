use std::time::Duration;

use crate::entities::{FilledBin, Instance, Solution};
use crate::io::ext_repr::{
    ExtAssignment, ExtBin, ExtCapacity, ExtInstance, ExtProduct, ExtSolution, ExtTier, ExtTierAssignment,
};

/// Exports a solution out of the library
pub fn export(solution: &Solution, run_time: Duration) -> ExtSolution {
    let instance = solution.instance();
    let tiers = instance
        .capacities
        .iter()
        .zip(solution.bins().iter())
        .map(|(capacity, c_bins)| ExtTier {
            capacity: capacity.name.clone(),
            bins: c_bins.iter().map(|b| export_bin(b, instance)).collect(),
        })
        .collect();

    ExtSolution {
        price: solution.price(),
        valid: solution.is_valid(),
        tiers,
        run_time_sec: run_time.as_secs_f64(),
    }
}

/// Exports only the assignment of a solution, in a form which can be imported again
pub fn export_assignment(solution: &Solution) -> ExtAssignment {
    let instance = solution.instance();
    let tiers = instance
        .capacities
        .iter()
        .zip(solution.assignment().iter())
        .map(|(capacity, products)| ExtTierAssignment {
            capacity: capacity.name.clone(),
            products: products
                .iter()
                .map(|&p_id| instance.product(p_id).name.clone())
                .collect(),
        })
        .collect();

    ExtAssignment { tiers }
}

/// Exports an instance, for example after it has been truncated
pub fn export_instance(instance: &Instance, name: &str) -> ExtInstance {
    ExtInstance {
        name: name.to_string(),
        products: instance
            .products
            .iter()
            .map(|p| ExtProduct {
                name: p.name.clone(),
                weight: p.weight,
                volume: p.volume,
            })
            .collect(),
        capacities: instance
            .capacities
            .iter()
            .map(|c| ExtCapacity {
                name: c.name.clone(),
                weight: c.weight,
                volume: c.volume,
                price: c.price,
            })
            .collect(),
    }
}

fn export_bin(bin: &FilledBin, instance: &Instance) -> ExtBin {
    ExtBin {
        products: bin
            .products
            .iter()
            .map(|&p_id| instance.product(p_id).name.clone())
            .collect(),
        weight: bin.weight,
        volume: bin.volume,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::entities::{CONTAINER, Capacity, PALLET, Product};
    use crate::io::import::import_assignment;
    use crate::util::PackConfig;

    #[test]
    fn exported_assignment_imports_back() {
        let products = (0..4)
            .map(|id| Product::new(id, format!("p{id}"), 2.0, 1.0))
            .collect();
        let capacities = vec![
            Capacity::new(PALLET, "pallet", 4.0, 4.0, 1.0),
            Capacity::new(CONTAINER, "container", 40.0, 40.0, 3.0),
        ];
        let instance = Arc::new(Instance::new(products, capacities, PackConfig::default()));
        let sol = Solution::with_assignment(instance.clone(), vec![vec![2, 0, 3], vec![1]]);

        let ext_sol = export(&sol, Duration::from_millis(1500));
        assert_eq!(ext_sol.price, 2.0 * 1.0 + 3.0);
        assert_eq!(ext_sol.tiers[0].bins[0].products, vec!["p2", "p0"]);
        assert_eq!(ext_sol.run_time_sec, 1.5);

        let assignment = import_assignment(&instance, &export_assignment(&sol)).unwrap();
        assert_eq!(assignment, sol.assignment());
    }
}
