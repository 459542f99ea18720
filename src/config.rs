use serde::{Deserialize, Serialize};

use crate::domain::service::ServiceConfig;

/// Configuration for the users directory module
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UsersDirectoryConfig {
    /// Whole-year age a candidate must have reached at creation time.
    #[serde(default = "default_minimum_age")]
    pub minimum_age: u32,
}

impl Default for UsersDirectoryConfig {
    fn default() -> Self {
        Self {
            minimum_age: default_minimum_age(),
        }
    }
}

fn default_minimum_age() -> u32 {
    18
}

impl From<&UsersDirectoryConfig> for ServiceConfig {
    fn from(config: &UsersDirectoryConfig) -> Self {
        Self {
            minimum_age: config.minimum_age,
        }
    }
}
