//! Configuration
//!
//! Settings are read from `~/.config/zoomiz/config.toml`. Every field is
//! optional; a missing or broken file never stops the viewer from starting.

mod loader;
pub mod types;

pub use loader::{ConfigResult, config_path, load_config, load_config_from_path, parse_config_toml};
pub use types::{Config, JumpConfig, StyleConfig};
