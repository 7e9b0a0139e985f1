use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;

use super::state::App;

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Ctrl+C: Exit application
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.is_jumping() {
            self.handle_jump_key(key);
        } else {
            self.handle_viewer_key(key);
        }
    }

    /// Keys while the jump input is open: everything else is query text
    fn handle_jump_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.close_jump(),
            KeyCode::Enter => self.accept(),
            _ => {
                let before = self.input.query().to_string();
                self.input.textarea.input(key);
                if self.input.query() != before {
                    self.on_query_changed();
                }
            }
        }
    }

    /// Navigation keys while the jump input is closed
    fn handle_viewer_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        match key.code {
            // Ctrl+J or '/': new jump session
            KeyCode::Char('j') if ctrl => self.open_jump(),
            KeyCode::Char('/') => self.open_jump(),

            KeyCode::Char('d') if ctrl => {
                let half = self.scroll.half_page();
                self.scroll.scroll_down(half);
                self.move_cursor_lines(half as isize);
            }
            KeyCode::Char('u') if ctrl => {
                let half = self.scroll.half_page();
                self.scroll.scroll_up(half);
                self.move_cursor_lines(-(half as isize));
            }
            KeyCode::PageDown => {
                let half = self.scroll.half_page();
                self.scroll.scroll_down(half);
                self.move_cursor_lines(half as isize);
            }
            KeyCode::PageUp => {
                let half = self.scroll.half_page();
                self.scroll.scroll_up(half);
                self.move_cursor_lines(-(half as isize));
            }

            // Horizontal scroll leaves the cursor where it is
            KeyCode::Char('H') => self.scroll.scroll_left(self.scroll.half_width()),
            KeyCode::Char('L') => self.scroll.scroll_right(self.scroll.half_width()),
            KeyCode::Left if shift => self.scroll.scroll_left(self.scroll.half_width()),
            KeyCode::Right if shift => self.scroll.scroll_right(self.scroll.half_width()),

            KeyCode::Char('j') | KeyCode::Down => self.move_cursor_lines(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_cursor_lines(-1),
            KeyCode::Char('h') | KeyCode::Left => self.move_cursor_columns(-1),
            KeyCode::Char('l') | KeyCode::Right => self.move_cursor_columns(1),
            KeyCode::Char('0') | KeyCode::Home => self.cursor_to_line_start(),
            KeyCode::Char('$') | KeyCode::End => self.cursor_to_line_end(),
            KeyCode::Char('g') => self.cursor_to_top(),
            KeyCode::Char('G') => self.cursor_to_bottom(),

            // Leave, printing the cursor position
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => self.should_quit = true,
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
