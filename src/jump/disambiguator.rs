use super::charset::{Charset, JumpTrigger};
use super::types::{Match, Target};

/// Outcome of one keystroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpDecision {
    /// Move to this target (taken from the previous frame) and end the session
    Jump(Target),
    /// Treat the keystroke as search text and relabel
    Continue,
}

impl JumpDecision {
    pub fn is_jump(&self) -> bool {
        matches!(self, JumpDecision::Jump(_))
    }
}

/// Decide whether `last_typed` selects a target or refines the search.
///
/// `matches` is the result for the full query including `last_typed`;
/// `previous` is the labeled set that was on screen before the keystroke.
pub fn decide(
    last_typed: char,
    trigger: JumpTrigger,
    charset: &Charset,
    matches: &[Match],
    previous: &[Target],
) -> JumpDecision {
    let wants_jump = match trigger {
        JumpTrigger::LabelMembership => charset.contains(last_typed),
        JumpTrigger::SearchExhausted => matches.is_empty(),
    };

    if !wants_jump {
        return JumpDecision::Continue;
    }

    previous
        .iter()
        .find(|target| target.label == last_typed)
        .map_or(JumpDecision::Continue, |target| JumpDecision::Jump(*target))
}

#[cfg(test)]
#[path = "disambiguator_tests.rs"]
mod disambiguator_tests;
