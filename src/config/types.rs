// Configuration type definitions

use serde::Deserialize;

use crate::jump::{CharsetError, CharsetMode, SessionConfig};

/// Jump behavior section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct JumpConfig {
    pub label_charset: CharsetMode,
    /// Labels used when `label_charset = "custom"`
    pub custom_charset: Option<String>,
    pub case_sensitive: bool,
}

impl JumpConfig {
    /// Session settings for this section; an unusable custom charset falls
    /// back to flash labels and the reason comes back as a warning
    pub fn session_config(&self) -> (SessionConfig, Option<CharsetError>) {
        SessionConfig::resolve(
            self.label_charset,
            self.custom_charset.as_deref(),
            self.case_sensitive,
        )
    }
}

/// Highlight colors, as ratatui color names ("yellow", "#ff8800", "214", ...)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub match_background: String,
    pub match_border: String,
    pub label_foreground: String,
    pub label_background: String,
    pub label_border: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        StyleConfig {
            match_background: "yellow".to_string(),
            match_border: "darkgray".to_string(),
            label_foreground: "black".to_string(),
            label_background: "magenta".to_string(),
            label_border: "white".to_string(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub jump: JumpConfig,
    #[serde(default)]
    pub style: StyleConfig,
}
