use log::trace;

use crate::entities::{CONTAINER, Instance, PALLET, Solution};
use crate::util::assertions::{assignment_is_complete, bins_match_assignment};

impl Solution {
    /// Migrates the contents of trailing pallet bins into the container tier.
    ///
    /// The trailing pallet bin is moved as long as the pallet tier uses at least
    /// [`consolidation_threshold`](crate::util::PackConfig::consolidation_threshold) bins,
    /// or as long as its weight fits in what is left of the trailing container bin (a full container if none is in use).
    /// Volume is not considered here, refilling the container tier opens new bins where needed.
    /// Moved products keep their relative order and are appended to the container's loading order.
    ///
    /// Of all intermediate states (including `self`), the cheapest one is returned,
    /// the most consolidated one on ties. The result is therefore never more expensive than `self`,
    /// and optimizing it again leaves its price unchanged.
    pub fn optimize_capacities(&self) -> Solution {
        let instance = self.instance().clone();
        let mut best = self.clone();
        let mut current = self.clone();
        let mut n_migrated = 0;

        while migration_required(&instance, &current) {
            let mut assignment = current.assignment().to_vec();
            //the trailing bin of a sequential fill is always a suffix of the loading order
            let trailing_len = current.bins_of(PALLET).last().map_or(0, |b| b.len());
            let split = assignment[PALLET].len() - trailing_len;
            let migrated = assignment[PALLET].split_off(split);
            assignment[CONTAINER].extend(migrated);

            current = Solution::with_assignment(instance.clone(), assignment);
            n_migrated += 1;

            if current.price() <= best.price() {
                best = current.clone();
            }
        }

        trace!(
            "[CONS] migrated {n_migrated} pallet bin(s), price {} -> {}",
            self.price(),
            best.price()
        );
        debug_assert!(assignment_is_complete(&instance, best.assignment()));
        debug_assert!(bins_match_assignment(&best));

        best
    }
}

fn migration_required(instance: &Instance, sol: &Solution) -> bool {
    let pallets = sol.bins_of(PALLET);
    let Some(trailing_pallet) = pallets.last() else {
        return false;
    };
    //a container tier without bins counts as an empty trailing bin
    let container_load = sol.bins_of(CONTAINER).last().map_or(0.0, |b| b.weight);
    let absorbable = container_load + trailing_pallet.weight <= instance.container().weight;

    pallets.len() >= instance.config.consolidation_threshold || absorbable
}
