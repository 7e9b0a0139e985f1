use crate::config::Config;
use crate::document::{Document, Position};
use crate::input::InputState;
use crate::jump::{JumpSession, SessionConfig, Target, TextSpan};
use crate::scroll::ScrollState;
use crate::theme::JumpTheme;

/// Application state
pub struct App {
    pub document: Document,
    pub cursor: Position,
    pub scroll: ScrollState,
    pub input: InputState,
    /// Open jump session, `None` while the input box is closed
    pub session: Option<JumpSession>,
    /// Labeled targets from the last keystroke, drawn over the text
    pub render_targets: Vec<Target>,
    /// Matches found by the last keystroke, labeled or not
    pub match_count: usize,
    pub theme: JumpTheme,
    pub status: Option<String>,
    pub should_quit: bool,
    session_config: SessionConfig,
}

impl App {
    /// Create a viewer for `text` with a jump session already open
    pub fn new(text: String, config: &Config) -> Self {
        let (session_config, warning) = config.jump.session_config();

        let mut app = Self {
            document: Document::new(text),
            cursor: Position::default(),
            scroll: ScrollState::new(),
            input: InputState::new(),
            session: None,
            render_targets: Vec::new(),
            match_count: 0,
            theme: JumpTheme::from_config(&config.style),
            status: warning.map(|e| format!("Using flash labels: {}", e)),
            should_quit: false,
            session_config,
        };

        app.open_jump();
        app
    }

    pub fn session_config(&self) -> &SessionConfig {
        &self.session_config
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    /// Show `message` after any status already on screen
    pub fn add_status(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.status = Some(match self.status.take() {
            Some(existing) => format!("{}; {}", existing, message),
            None => message,
        });
    }

    /// Whether the jump input is open
    pub fn is_jumping(&self) -> bool {
        self.session.is_some()
    }

    /// Start a fresh jump session, discarding any open one
    pub fn open_jump(&mut self) {
        self.close_jump();
        self.session = Some(JumpSession::new(self.session_config.clone()));
        self.input.open(&self.session_config.placeholder());
    }

    /// Tear down the jump session and hide its labels
    pub fn close_jump(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.on_session_end();
        }
        self.render_targets.clear();
        self.match_count = 0;
        self.input.close();
    }

    /// Spans of text currently on screen
    pub fn visible_spans(&self) -> Vec<TextSpan> {
        self.document.visible_spans(
            self.scroll.offset,
            self.scroll.viewport_height,
            self.scroll.h_offset,
            self.scroll.viewport_width,
        )
    }

    /// Feed the current input text to the jump session
    pub fn on_query_changed(&mut self) {
        let spans = self.visible_spans();
        let query = self.input.query().to_string();
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let outcome = session.on_input_changed(&query, &self.document.view(spans));

        match outcome.jump_target() {
            Some(target) => self.jump_to(target),
            None => {
                self.render_targets = outcome.render_targets;
                self.match_count = outcome.match_count;
            }
        }
    }

    /// Jump to the first target, if there is one
    pub fn accept(&mut self) {
        let target = self.session.as_mut().and_then(JumpSession::on_accept);
        if let Some(target) = target {
            self.jump_to(target);
        }
    }

    fn jump_to(&mut self, target: Target) {
        self.cursor = self.document.position_at(target.start());
        self.reveal(self.cursor, target.matched.len());
        self.close_jump();
        log::debug!(
            "Cursor moved to {}:{}",
            self.cursor.line + 1,
            self.cursor.column + 1
        );
    }

    /// Resize the viewport to the text pane's inner area
    pub fn update_viewport(&mut self, width: usize, height: usize) {
        self.scroll.update_bounds(self.document.line_count(), height);
        // One spare cell for a cursor or label past the longest line
        self.scroll
            .update_h_bounds(self.document.max_line_width() + 1, width);
    }

    /// Move the cursor by whole lines, keeping the column where the line allows
    pub fn move_cursor_lines(&mut self, delta: isize) {
        let last_line = self.document.line_count() - 1;
        let line = self.cursor.line.saturating_add_signed(delta).min(last_line);
        let column = self.cursor.column.min(self.document.line_len(line));
        self.set_cursor(Position::new(line, column));
    }

    /// Move the cursor within the current line
    pub fn move_cursor_columns(&mut self, delta: isize) {
        let line_len = self.document.line_len(self.cursor.line);
        let column = self.cursor.column.saturating_add_signed(delta).min(line_len);
        self.set_cursor(Position::new(self.cursor.line, column));
    }

    pub fn cursor_to_line_start(&mut self) {
        self.set_cursor(Position::new(self.cursor.line, 0));
    }

    pub fn cursor_to_line_end(&mut self) {
        let line_len = self.document.line_len(self.cursor.line);
        self.set_cursor(Position::new(self.cursor.line, line_len));
    }

    pub fn cursor_to_top(&mut self) {
        self.set_cursor(Position::default());
        self.scroll.jump_to_top();
    }

    pub fn cursor_to_bottom(&mut self) {
        let last_line = self.document.line_count() - 1;
        self.set_cursor(Position::new(last_line, 0));
        self.scroll.jump_to_bottom();
    }

    fn set_cursor(&mut self, position: Position) {
        self.cursor = position;
        self.reveal(position, 1);
    }

    /// Scroll so `len` characters from `position` are on screen
    fn reveal(&mut self, position: Position, len: usize) {
        let first_cell = self.document.display_column(position);
        let end = Position::new(position.line, position.column.saturating_add(len));
        let last_cell = self.document.display_column(end);
        self.scroll.reveal(
            position.line,
            first_cell,
            last_cell.saturating_sub(first_cell).max(1),
        );
    }

    /// Final cursor position as 1-based `LINE:COLUMN`
    pub fn cursor_display(&self) -> String {
        format!("{}:{}", self.cursor.line + 1, self.cursor.column + 1)
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
