use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use super::types::Config;
use crate::error::ZoomizError;

const CONFIG_DIR: &str = "zoomiz";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration plus a message to show if something was off
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

impl ConfigResult {
    fn defaults(warning: Option<String>) -> Self {
        Self {
            config: Config::default(),
            warning,
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

pub fn load_config() -> ConfigResult {
    let Some(path) = config_path() else {
        return ConfigResult::defaults(None);
    };

    load_config_from_path(&path)
}

/// Load `path`. A missing file silently yields defaults; an unreadable or
/// unparsable one yields defaults and a warning.
pub fn load_config_from_path(path: &Path) -> ConfigResult {
    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => return ConfigResult::defaults(None),
        Err(e) => {
            log::warn!("Cannot open config {}: {}", path.display(), e);
            return ConfigResult::defaults(Some(format!("Config not loaded: {}", e)));
        }
    };

    let mut contents = String::new();
    if let Err(e) = file.read_to_string(&mut contents) {
        log::warn!("Cannot read config {}: {}", path.display(), e);
        return ConfigResult::defaults(Some(format!("Config not loaded: {}", e)));
    }

    match parse_config_toml(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", path.display());
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(e) => {
            log::warn!("{} ({})", e, path.display());
            ConfigResult::defaults(Some(e.to_string()))
        }
    }
}

pub fn parse_config_toml(content: &str) -> Result<Config, ZoomizError> {
    toml::from_str(content).map_err(|e| ZoomizError::ConfigParse(e.message().to_string()))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
