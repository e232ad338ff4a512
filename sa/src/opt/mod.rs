/// Simulated annealing over product assignments
pub mod annealing;

/// Independent parallel runs of the search
pub mod multi_start;

/// Hooks to follow the progress of a search
pub mod observer;
