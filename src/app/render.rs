use std::collections::HashMap;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::state::App;
use crate::input::input_render;

const STATUS_HINT: &str = "/ jump  q quit ";

/// Decoration drawn over one buffer character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Overlay {
    Match,
    Label(char),
}

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let bottom_height = if self.input.is_visible() { 3 } else { 1 };
        let layout = Layout::vertical([
            Constraint::Min(1),                // Text pane takes most of the space
            Constraint::Length(bottom_height), // Jump input or status line
        ])
        .split(frame.area());

        self.render_text_pane(frame, layout[0]);

        if self.input.is_visible() {
            input_render::render_field(self, frame, layout[1]);
        } else {
            self.render_status_line(frame, layout[1]);
        }
    }

    fn render_text_pane(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.is_jumping() {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" zoomiz ")
            .border_style(Style::default().fg(border_color));

        let inner = block.inner(area);
        self.update_viewport(inner.width as usize, inner.height as usize);

        let overlays = self.overlays();
        let first_line = self.scroll.offset;
        let last_line = first_line
            .saturating_add(self.scroll.viewport_height)
            .min(self.document.line_count());

        let lines: Vec<Line> = (first_line..last_line)
            .map(|line| self.render_line(line, &overlays))
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    /// Match highlights and label glyphs keyed by character offset.
    /// A label sits on the character right after its match and wins over highlights.
    fn overlays(&self) -> HashMap<usize, Overlay> {
        let mut overlays = HashMap::new();
        for target in &self.render_targets {
            for offset in target.start()..target.end() {
                overlays.insert(offset, Overlay::Match);
            }
        }
        for target in &self.render_targets {
            overlays.insert(target.end(), Overlay::Label(target.label));
        }
        overlays
    }

    fn render_line(&self, line: usize, overlays: &HashMap<usize, Overlay>) -> Line<'static> {
        let (Some(range), Some(window)) = (
            self.document.line_range(line),
            self.document.line_window(
                line,
                self.scroll.h_offset,
                self.scroll.viewport_width,
            ),
        ) else {
            return Line::default();
        };
        let cursor = (!self.is_jumping() && self.cursor.line == line)
            .then(|| range.start + self.cursor.column);

        let mut spans = Vec::new();
        let mut run = String::new();
        let mut run_style = Style::default();

        // One extra character so a label or cursor just past the window still shows
        for offset in window.start..=window.end {
            let text_char = if offset < range.end {
                self.document.char_at(offset)
            } else {
                None
            };
            let (glyph, mut style) = match (overlays.get(&offset), text_char) {
                (Some(Overlay::Label(label)), _) => (*label, self.theme.label_style),
                (Some(Overlay::Match), c) => (c.unwrap_or(' '), self.theme.match_style),
                (None, Some(c)) => (c, Style::default()),
                (None, None) if cursor == Some(offset) => (' ', Style::default()),
                (None, None) => break,
            };

            if cursor == Some(offset) {
                style = style.add_modifier(Modifier::REVERSED);
            }

            if style != run_style && !run.is_empty() {
                spans.push(Span::styled(std::mem::take(&mut run), run_style));
            }
            run_style = style;
            run.push(if glyph.is_control() { ' ' } else { glyph });
        }

        if !run.is_empty() {
            spans.push(Span::styled(run, run_style));
        }

        Line::from(spans)
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        let [message_area, hint_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(STATUS_HINT.len() as u16)])
                .areas(area);

        let message = match &self.status {
            Some(status) => Span::styled(format!(" {}", status), Style::default().fg(Color::Yellow)),
            None => Span::styled(
                format!(" {}", self.cursor_display()),
                Style::default().fg(Color::Gray),
            ),
        };

        frame.render_widget(Paragraph::new(Line::from(message)), message_area);
        frame.render_widget(
            Paragraph::new(Span::styled(STATUS_HINT, Style::default().fg(Color::DarkGray)))
                .alignment(Alignment::Right),
            hint_area,
        );
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
