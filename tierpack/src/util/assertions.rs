use float_cmp::approx_eq;
use itertools::Itertools;
use log::error;

use crate::entities::{Capacity, Instance, Product, Solution};

//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks and tests

pub fn instance_product_capacity_ids_correct(products: &[Product], capacities: &[Capacity]) -> bool {
    products.iter().enumerate().all(|(i, p)| p.id == i)
        && capacities.iter().enumerate().all(|(i, c)| c.id == i)
}

/// Every product of the instance appears in exactly one class, exactly once.
pub fn assignment_is_complete(instance: &Instance, assignment: &[Vec<usize>]) -> bool {
    let mut seen = vec![0_usize; instance.n_products()];
    for &p_id in assignment.iter().flatten() {
        match seen.get_mut(p_id) {
            Some(count) => *count += 1,
            None => {
                error!("assignment contains unknown product id {p_id}");
                return false;
            }
        }
    }
    match seen.iter().positions(|&count| count != 1).next() {
        Some(p_id) => {
            error!(
                "product {p_id} is assigned {} times instead of once",
                seen[p_id]
            );
            false
        }
        None => true,
    }
}

/// The bins of every class contain exactly the assigned products, in order, with correct totals.
pub fn bins_match_assignment(sol: &Solution) -> bool {
    let instance = sol.instance();
    sol.assignment()
        .iter()
        .zip(sol.bins().iter())
        .all(|(order, c_bins)| {
            let loaded = c_bins.iter().flat_map(|b| b.products.iter().copied()).collect_vec();
            let totals_correct = c_bins.iter().all(|b| {
                let weight: f64 = b.products.iter().map(|&p| instance.product(p).weight).sum();
                let volume: f64 = b.products.iter().map(|&p| instance.product(p).volume).sum();
                approx_eq!(f64, weight, b.weight, epsilon = 1e-9)
                    && approx_eq!(f64, volume, b.volume, epsilon = 1e-9)
            });
            loaded == *order && totals_correct && c_bins.iter().all(|b| !b.is_empty())
        })
}

/// `after` can be obtained from `before` with either a swap of two products within one class,
/// or a transfer of a single product from one class to another.
pub fn is_single_move(before: &[Vec<usize>], after: &[Vec<usize>]) -> bool {
    let changed = before
        .iter()
        .zip(after.iter())
        .positions(|(b, a)| b != a)
        .collect_vec();

    match changed.as_slice() {
        [] => true,
        [c] => {
            //swap within a class: same length, exactly two positions differ and are exchanged
            let (b, a) = (&before[*c], &after[*c]);
            let diffs = b.iter().zip(a.iter()).positions(|(x, y)| x != y).collect_vec();
            b.len() == a.len()
                && diffs.len() == 2
                && b[diffs[0]] == a[diffs[1]]
                && b[diffs[1]] == a[diffs[0]]
        }
        [c1, c2] => {
            //transfer: the product one class lost is the product the other gained
            let (src, dst) = match before[*c1].len() > after[*c1].len() {
                true => (*c1, *c2),
                false => (*c2, *c1),
            };
            match (
                removed_element(&before[src], &after[src]),
                removed_element(&after[dst], &before[dst]),
            ) {
                (Some(lost), Some(gained)) => lost == gained,
                _ => false,
            }
        }
        _ => false,
    }
}

/// The element which was removed from `longer` to obtain `shorter`, if exactly one was
fn removed_element(longer: &[usize], shorter: &[usize]) -> Option<usize> {
    if longer.len() != shorter.len() + 1 {
        return None;
    }
    let i = longer
        .iter()
        .zip(shorter.iter())
        .position(|(l, s)| l != s)
        .unwrap_or(shorter.len());
    (longer[i + 1..] == shorter[i..]).then_some(longer[i])
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(&[vec![0, 1], vec![2]], &[vec![0, 1], vec![2]]; "unchanged")]
    #[test_case(&[vec![0, 1, 2], vec![3]], &[vec![2, 1, 0], vec![3]]; "swap")]
    #[test_case(&[vec![0, 1], vec![2]], &[vec![0], vec![2, 1]]; "transfer of the trailing product")]
    #[test_case(&[vec![0, 1], vec![2]], &[vec![1], vec![0, 2]]; "transfer to the front")]
    fn single_moves(before: &[Vec<usize>], after: &[Vec<usize>]) {
        assert!(is_single_move(before, after));
    }

    #[test_case(&[vec![0, 1], vec![2]], &[vec![1], vec![2, 1]]; "different product inserted than removed")]
    #[test_case(&[vec![0, 1], vec![2, 3]], &[vec![0], vec![2, 3, 4]]; "unknown product inserted")]
    #[test_case(&[vec![0, 1, 2], vec![3]], &[vec![1, 2, 0], vec![3]]; "rotation")]
    #[test_case(&[vec![0, 1, 2], vec![3]], &[vec![0], vec![3, 1, 2]]; "two products transferred")]
    fn not_single_moves(before: &[Vec<usize>], after: &[Vec<usize>]) {
        assert!(!is_single_move(before, after));
    }
}
