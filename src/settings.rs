use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::rod::HeavenCap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbacusSettings {
    pub heaven_cap: HeavenCap,
    /// Commit the empty board at construction so the first move can be undone.
    pub record_initial_state: bool,
    pub group_separator: char,
}

impl Default for AbacusSettings {
    fn default() -> Self {
        Self {
            heaven_cap: HeavenCap::Uncapped,
            record_initial_state: false,
            group_separator: ',',
        }
    }
}

impl AbacusSettings {
    /// Parses settings from a JSON object; missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
