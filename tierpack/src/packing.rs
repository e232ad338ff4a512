use crate::entities::{Capacity, FilledBin, Product};

/// Loads the products in `order` sequentially into bins of `capacity`.
///
/// A new bin is opened whenever the next product would push the weight or the volume of the current bin
/// strictly over the limits of the class. Products are never reordered and earlier bins are never revisited.
/// A product which does not fit in an empty bin is placed alone in an (invalid) bin.
///
/// `products` is indexed by product id, `order` contains product ids.
pub fn fill(capacity: &Capacity, products: &[Product], order: &[usize]) -> Vec<FilledBin> {
    let mut bins = vec![];
    let mut current = FilledBin::new(capacity.id);

    for &p_id in order {
        let product = &products[p_id];
        if !current.is_empty() && !current.can_take(capacity, product) {
            let full = std::mem::replace(&mut current, FilledBin::new(capacity.id));
            bins.push(full);
        }
        current.load(product);
    }

    if !current.is_empty() {
        bins.push(current);
    }
    bins
}
