//! Styles for match highlights and labels, resolved once per session from config

use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};

use crate::config::StyleConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpTheme {
    pub match_style: Style,
    pub label_style: Style,
}

impl JumpTheme {
    pub fn from_config(config: &StyleConfig) -> Self {
        let defaults = StyleConfig::default();
        let color = |value: &str, fallback: &str| {
            parse_color(value).unwrap_or_else(|| {
                log::warn!("Unknown color {:?}, using {}", value, fallback);
                parse_color(fallback).unwrap_or(Color::Reset)
            })
        };

        let match_style = Style::default()
            .bg(color(&config.match_background, &defaults.match_background))
            .fg(Color::Black)
            .add_modifier(Modifier::UNDERLINED)
            .underline_color(color(&config.match_border, &defaults.match_border));

        let label_style = Style::default()
            .fg(color(&config.label_foreground, &defaults.label_foreground))
            .bg(color(&config.label_background, &defaults.label_background))
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            .underline_color(color(&config.label_border, &defaults.label_border));

        Self {
            match_style,
            label_style,
        }
    }
}

impl Default for JumpTheme {
    fn default() -> Self {
        Self::from_config(&StyleConfig::default())
    }
}

fn parse_color(value: &str) -> Option<Color> {
    Color::from_str(value.trim()).ok()
}
