use serde::{Deserialize, Serialize};

use tierpack::io::ext_repr::{ExtInstance, ExtSolution};

use crate::config::SAConfig;

#[derive(Serialize, Deserialize, Clone)]
pub struct SAOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: SAConfig,
}
