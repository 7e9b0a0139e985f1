use ratatui::style::{Color, Style};
use tui_textarea::TextArea;

/// The one-line jump input box
pub struct InputState {
    pub textarea: TextArea<'static>,
    visible: bool,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));

        Self {
            textarea,
            visible: false,
        }
    }

    /// Show an empty input box with `placeholder` as the hint
    pub fn open(&mut self, placeholder: &str) {
        self.clear();
        self.textarea.set_placeholder_text(placeholder);
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.clear();
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn query(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    fn clear(&mut self) {
        self.textarea.select_all();
        self.textarea.cut();
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
