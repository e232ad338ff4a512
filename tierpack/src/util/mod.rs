/// Set of functions used throughout assure the correctness of the library.
pub mod assertions;

mod config;

#[doc(inline)]
pub use config::PackConfig;
