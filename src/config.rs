use serde::{Deserialize, Serialize};

use crate::{error::Result, factory::DEFAULT_NAME_PREFIX};

/// Serializable thread factory settings.
///
/// A missing `name_prefix` means [`DEFAULT_NAME_PREFIX`]; an explicit `null` means no prefix.
///
/// ```json
/// { "name_prefix": "Worker", "name": "IO", "daemon": true, "priority": 7 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThreadFactoryConfig {
    pub name: Option<String>,
    #[serde(default = "default_name_prefix")]
    pub name_prefix: Option<String>,
    pub daemon: bool,
    pub priority: Option<i32>,
}

fn default_name_prefix() -> Option<String> {
    Some(DEFAULT_NAME_PREFIX.to_string())
}

impl Default for ThreadFactoryConfig {
    fn default() -> Self {
        ThreadFactoryConfig {
            name: None,
            name_prefix: default_name_prefix(),
            daemon: false,
            priority: None,
        }
    }
}

impl ThreadFactoryConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
