pub mod builders;
pub mod config;
pub mod io;
pub mod opt;
pub mod time;

pub use time::EPOCH;
