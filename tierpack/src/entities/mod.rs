mod capacity;
mod filled_bin;
mod instance;
mod product;
mod solution;

#[doc(inline)]
pub use capacity::Capacity;

#[doc(inline)]
pub use capacity::CONTAINER;

#[doc(inline)]
pub use capacity::PALLET;

#[doc(inline)]
pub use filled_bin::FilledBin;

#[doc(inline)]
pub use instance::Instance;

#[doc(inline)]
pub use product::Product;

#[doc(inline)]
pub use solution::Solution;
