//! Search-then-jump core
//!
//! Finds literal occurrences of a live query inside the visible spans of a
//! buffer, labels them from a charset, and decides on every keystroke whether
//! the input refines the search or selects a labeled target.
//!
//! One keystroke is one pass: matcher, then disambiguator, then (only when no
//! jump happened) labeler. The labeled targets become the previous frame for
//! the next pass.

pub mod charset;
pub mod disambiguator;
pub mod labeler;
pub mod matcher;
pub mod session;
mod types;

pub use charset::{Charset, CharsetError, CharsetMode, JumpTrigger};
pub use disambiguator::{JumpDecision, decide};
pub use labeler::assign_labels;
pub use matcher::{SpanSlicer, find_matches, find_matches_with};
pub use session::{InputOutcome, JumpHost, JumpSession, SessionConfig, SessionState, step};
pub use types::{Match, Target, TextSpan};
