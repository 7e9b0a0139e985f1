use std::collections::HashSet;

use super::charset::Charset;
use super::matcher::fold_char;
use super::types::{Match, Target};

/// Assign labels to `matches` in order.
///
/// A charset character is never used as a label when typing it next would
/// extend some match into a longer one. Labels are handed out greedily from
/// the front of the charset; once it is exhausted the remaining matches are
/// dropped, so the result is never longer than the charset or the matches.
pub fn assign_labels(
    matches: &[Match],
    charset: &Charset,
    text_len: usize,
    char_at: impl Fn(usize) -> Option<char>,
    case_sensitive: bool,
) -> Vec<Target> {
    let forbidden = continuation_chars(matches, text_len, &char_at, case_sensitive);
    let labels = charset.chars();

    let mut cursor = 0;
    let mut targets = Vec::with_capacity(matches.len().min(labels.len()));

    for matched in matches {
        while labels
            .get(cursor)
            .is_some_and(|&label| forbidden.contains(&fold_char(label, case_sensitive)))
        {
            cursor += 1;
        }

        let Some(&label) = labels.get(cursor) else {
            break;
        };

        targets.push(Target {
            matched: *matched,
            label,
        });
        cursor += 1;
    }

    targets
}

/// Characters directly after each match, i.e. every character that would
/// still be a search continuation if typed next
fn continuation_chars(
    matches: &[Match],
    text_len: usize,
    char_at: &impl Fn(usize) -> Option<char>,
    case_sensitive: bool,
) -> HashSet<char> {
    matches
        .iter()
        .filter(|m| m.end < text_len)
        .filter_map(|m| char_at(m.end))
        .map(|c| fold_char(c, case_sensitive))
        .collect()
}

#[cfg(test)]
#[path = "labeler_tests.rs"]
mod labeler_tests;
