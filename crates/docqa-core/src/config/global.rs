//! Global configuration location (~/.config/docqa/config.toml)

use std::path::PathBuf;

use crate::error::{DocqaError, Result};

const CONFIG_DIR: &str = "docqa";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "DOCQA_CONFIG_DIR";

/// Path of the global config file, honoring `DOCQA_CONFIG_DIR`
pub fn config_path() -> Result<PathBuf> {
    let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
        PathBuf::from(env_dir)
    } else {
        dirs::config_dir()
            .ok_or_else(|| DocqaError::Other("unable to determine config directory".to_string()))?
            .join(CONFIG_DIR)
    };

    Ok(config_dir.join(CONFIG_FILE))
}
