use serde::{Deserialize, Serialize};

/// Aggregate record counts served by the records API.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Statistics {
    #[serde(default)]
    pub missing: u64,
    #[serde(default)]
    pub located: u64,
}
