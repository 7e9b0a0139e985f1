//! Jump input rendering
//!
//! The input box sits below the text pane while a jump session is open.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::app::App;

/// Render the jump input field (bottom)
pub fn render_field(app: &mut App, frame: &mut Frame, area: Rect) {
    let count_style = if app.match_count == 0 && !app.input.query().is_empty() {
        // No matches found - show in red
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(" Zoomiz ")
        .title_top(
            Line::from(Span::styled(match_count_display(app), count_style))
                .alignment(Alignment::Right),
        )
        .border_style(Style::default().fg(Color::Cyan));

    if let Some(status) = &app.status {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {} ", status),
            Style::default().fg(Color::Yellow),
        )));
    }

    app.input.textarea.set_block(block);
    frame.render_widget(&app.input.textarea, area);
}

/// "(labeled/matches)", e.g. "(2/3)" when one match ran out of labels
pub fn match_count_display(app: &App) -> String {
    format!(" ({}/{}) ", app.render_targets.len(), app.match_count)
}
