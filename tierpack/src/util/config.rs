use serde::{Deserialize, Serialize};

/// Configuration of the packing logic shared by all solutions of an instance
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PackConfig {
    /// Number of pallet bins from which consolidation into the container tier is forced,
    /// even if the trailing pallet bin does not fit in the trailing container bin
    pub consolidation_threshold: usize,
    /// Exponent applied to the slack of every bin in the weight and volume penalties
    pub slack_exponent: i32,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            consolidation_threshold: 6,
            slack_exponent: 2,
        }
    }
}
