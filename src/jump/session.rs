use super::charset::{Charset, CharsetError, CharsetMode};
use super::disambiguator::{JumpDecision, decide};
use super::labeler::assign_labels;
use super::matcher::{SpanSlicer, find_matches_with};
use super::types::{Target, TextSpan};

/// What the jump core needs from the surrounding editor or viewer
pub trait JumpHost {
    /// Searchable regions, recomputed before every pass
    fn visible_spans(&self) -> Vec<TextSpan>;

    /// Whole buffer text; span offsets index its characters
    fn text(&self) -> &str;

    /// Buffer length in characters
    fn char_len(&self) -> usize;

    fn char_at(&self, offset: usize) -> Option<char>;

    /// Text covered by `span`, clamped to the end of the buffer.
    ///
    /// The default walks the buffer from the start; hosts that index their
    /// text should answer directly.
    fn span_text(&self, span: TextSpan) -> Option<&str> {
        SpanSlicer::new(self.text()).slice(span)
    }
}

/// Settings read once when a session starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub charset_mode: CharsetMode,
    pub charset: Charset,
    pub case_sensitive: bool,
}

impl SessionConfig {
    pub fn new(charset_mode: CharsetMode, charset: Charset, case_sensitive: bool) -> Self {
        Self {
            charset_mode,
            charset,
            case_sensitive,
        }
    }

    /// Build a config for `mode`, falling back to flash labels when the
    /// custom charset is unusable. The fallback reason is returned, not raised.
    pub fn resolve(
        mode: CharsetMode,
        custom_charset: Option<&str>,
        case_sensitive: bool,
    ) -> (Self, Option<CharsetError>) {
        let (charset, warning) = Charset::resolve(mode, custom_charset);
        (Self::new(mode, charset, case_sensitive), warning)
    }

    /// Input hint describing the active settings
    pub fn placeholder(&self) -> String {
        format!(
            "Search... (Labels: {}, Case Sensitive: {})",
            self.charset_mode, self.case_sensitive
        )
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(CharsetMode::Flash, Charset::flash(), false)
    }
}

/// The labeled frame left behind by the last pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub query: String,
    pub current_targets: Vec<Target>,
}

/// Result of one keystroke, handed to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputOutcome {
    pub decision: JumpDecision,
    /// Targets to draw; empty after a jump or for an empty query
    pub render_targets: Vec<Target>,
    /// Number of matches before labeling, including unlabeled ones
    pub match_count: usize,
}

impl InputOutcome {
    fn cleared() -> Self {
        Self {
            decision: JumpDecision::Continue,
            render_targets: Vec::new(),
            match_count: 0,
        }
    }

    pub fn is_jump(&self) -> bool {
        self.decision.is_jump()
    }

    pub fn jump_target(&self) -> Option<Target> {
        match self.decision {
            JumpDecision::Jump(target) => Some(target),
            JumpDecision::Continue => None,
        }
    }
}

/// Run one complete pass for `query` against the previous frame in `state`.
///
/// Nothing is mutated: the frame to use for the next keystroke is returned
/// alongside the outcome.
pub fn step<H: JumpHost + ?Sized>(
    config: &SessionConfig,
    state: &SessionState,
    query: &str,
    host: &H,
) -> (InputOutcome, SessionState) {
    let Some(last_typed) = query.chars().next_back() else {
        return (InputOutcome::cleared(), SessionState::default());
    };

    let spans = host.visible_spans();
    let matches = find_matches_with(&spans, query, config.case_sensitive, |span| {
        host.span_text(span)
    });

    let decision = decide(
        last_typed,
        config.charset_mode.jump_trigger(),
        &config.charset,
        &matches,
        &state.current_targets,
    );

    if let JumpDecision::Jump(target) = decision {
        log::debug!(
            "Jump on '{}' to offset {} (query {:?})",
            target.label,
            target.start(),
            query
        );
        let outcome = InputOutcome {
            decision,
            render_targets: Vec::new(),
            match_count: matches.len(),
        };
        return (outcome, SessionState::default());
    }

    let targets = assign_labels(
        &matches,
        &config.charset,
        host.char_len(),
        |offset| host.char_at(offset),
        config.case_sensitive,
    );

    log::debug!(
        "Query {:?}: {} matches in {} spans, {} labeled",
        query,
        matches.len(),
        spans.len(),
        targets.len()
    );

    let outcome = InputOutcome {
        decision,
        render_targets: targets.clone(),
        match_count: matches.len(),
    };
    let next = SessionState {
        query: query.to_string(),
        current_targets: targets,
    };

    (outcome, next)
}

/// One interactive jump session, from opening the input to closing it.
///
/// Each view owns its own session; sessions never share state.
#[derive(Debug, Clone)]
pub struct JumpSession {
    config: SessionConfig,
    state: SessionState,
    closed: bool,
}

impl JumpSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            state: SessionState::default(),
            closed: false,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn current_targets(&self) -> &[Target] {
        &self.state.current_targets
    }

    /// Whether a jump, accept or teardown already ended this session
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Handle a change of the input text.
    ///
    /// A jump closes the session; later input is ignored.
    pub fn on_input_changed<H: JumpHost + ?Sized>(&mut self, query: &str, host: &H) -> InputOutcome {
        if self.closed {
            log::debug!("Ignoring input {:?} on a closed session", query);
            return InputOutcome::cleared();
        }

        let (outcome, state) = step(&self.config, &self.state, query, host);
        self.state = state;
        if outcome.is_jump() {
            self.closed = true;
        }

        outcome
    }

    /// Accept the input: take the first target, if any, and close the session
    pub fn on_accept(&mut self) -> Option<Target> {
        if self.closed {
            return None;
        }

        let target = self.state.current_targets.first().copied()?;
        self.on_session_end();
        Some(target)
    }

    /// Discard all state; the host is tearing the session down
    pub fn on_session_end(&mut self) {
        self.state = SessionState::default();
        self.closed = true;
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
