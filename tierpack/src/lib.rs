//! The `tierpack` library: assignment of products to a two-tier (pallet/container) shipping capacity.
//!
//! It contains the problem model, the sequential packing engine, the [`Solution`](entities::Solution)
//! representation with its consolidation pass and its neighborhood move.
//! Optimization strategies built on top of these components live in separate crates.

/// Entities to model the two-tier product assignment problem
pub mod entities;

/// Deterministic sequential filling of bins
pub mod packing;

/// Migration of trailing pallet bins into the container tier
pub mod consolidation;

/// Randomized local perturbations of a solution
pub mod neighbor;

/// Importing problem instances into and exporting solutions out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
