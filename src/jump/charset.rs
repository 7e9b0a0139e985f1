use std::collections::HashSet;
use std::fmt;

use clap::ValueEnum;
use serde::Deserialize;
use thiserror::Error;

/// Home-row first, then the rest of the keyboard, lowercase before uppercase
pub const FLASH_LABELS: &str = "asdfjklghqwertyuiopzxcvbnmASDFJKLGHQWERTYUIOPZXCVBNM";
pub const UPPERCASE_LABELS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE_LABELS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const NUMERIC_LABELS: &str = "0123456789";

/// Which label alphabet a session draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CharsetMode {
    #[default]
    Flash,
    Uppercase,
    Lowercase,
    Numeric,
    Custom,
}

/// How a keystroke is recognized as a jump request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpTrigger {
    /// Any charset character is a jump request, whatever the live match count.
    /// Only sound when labels never collide with ordinary search text.
    LabelMembership,
    /// A keystroke is search text while the extended query still matches;
    /// the previous frame's labels are consulted only once it matches nothing.
    SearchExhausted,
}

impl CharsetMode {
    pub fn name(self) -> &'static str {
        match self {
            CharsetMode::Flash => "flash",
            CharsetMode::Uppercase => "uppercase",
            CharsetMode::Lowercase => "lowercase",
            CharsetMode::Numeric => "numeric",
            CharsetMode::Custom => "custom",
        }
    }

    /// Built-in alphabet for this mode, `None` for [`CharsetMode::Custom`]
    pub fn builtin_labels(self) -> Option<&'static str> {
        match self {
            CharsetMode::Flash => Some(FLASH_LABELS),
            CharsetMode::Uppercase => Some(UPPERCASE_LABELS),
            CharsetMode::Lowercase => Some(LOWERCASE_LABELS),
            CharsetMode::Numeric => Some(NUMERIC_LABELS),
            CharsetMode::Custom => None,
        }
    }

    pub fn jump_trigger(self) -> JumpTrigger {
        match self {
            CharsetMode::Uppercase => JumpTrigger::LabelMembership,
            CharsetMode::Flash
            | CharsetMode::Lowercase
            | CharsetMode::Numeric
            | CharsetMode::Custom => JumpTrigger::SearchExhausted,
        }
    }
}

impl fmt::Display for CharsetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reasons a label alphabet is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CharsetError {
    #[error("custom charset is not configured")]
    MissingCustom,

    #[error("charset is empty")]
    Empty,

    #[error("charset contains duplicate label '{0}'")]
    Duplicate(char),
}

/// Ordered set of distinct label characters; earlier characters are assigned first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    labels: Vec<char>,
}

impl Charset {
    pub fn new(labels: impl IntoIterator<Item = char>) -> Result<Self, CharsetError> {
        let labels: Vec<char> = labels.into_iter().collect();
        if labels.is_empty() {
            return Err(CharsetError::Empty);
        }

        let mut seen = HashSet::with_capacity(labels.len());
        for &label in &labels {
            if !seen.insert(label) {
                return Err(CharsetError::Duplicate(label));
            }
        }

        Ok(Self { labels })
    }

    pub fn parse(labels: &str) -> Result<Self, CharsetError> {
        Self::new(labels.chars())
    }

    /// The fallback alphabet
    pub fn flash() -> Self {
        Self {
            labels: FLASH_LABELS.chars().collect(),
        }
    }

    /// Resolve the alphabet for `mode`.
    ///
    /// A missing or invalid custom charset never fails the session: the flash
    /// alphabet is used instead and the reason is returned so the caller can
    /// surface it as a warning.
    pub fn resolve(mode: CharsetMode, custom: Option<&str>) -> (Self, Option<CharsetError>) {
        let resolved = match mode.builtin_labels() {
            Some(labels) => Self::parse(labels),
            None => custom.map_or(Err(CharsetError::MissingCustom), Self::parse),
        };

        match resolved {
            Ok(charset) => (charset, None),
            Err(e) => {
                log::warn!("Falling back to flash labels for {} charset: {}", mode, e);
                (Self::flash(), Some(e))
            }
        }
    }

    pub fn chars(&self) -> &[char] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.labels.contains(&c)
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self::flash()
    }
}

#[cfg(test)]
#[path = "charset_tests.rs"]
mod charset_tests;
