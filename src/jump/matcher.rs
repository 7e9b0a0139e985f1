use std::borrow::Cow;

use super::types::{Match, TextSpan};

/// Find every literal occurrence of `query` inside `spans`.
///
/// Matches come back ordered by span, then by start offset. After each hit the
/// scan resumes one character later, so overlapping occurrences are reported
/// ("aa" in "aaa" hits at 0 and 1).
///
/// Span bounds are turned into byte offsets in one forward walk over `text`,
/// so spans sorted by start cost a single pass over the buffer.
pub fn find_matches(
    spans: &[TextSpan],
    text: &str,
    query: &str,
    case_sensitive: bool,
) -> Vec<Match> {
    let mut slicer = SpanSlicer::new(text);
    find_matches_with(spans, query, case_sensitive, |span| slicer.slice(span))
}

/// Like [`find_matches`], with span text supplied by `slice`.
///
/// Hosts that keep a character index hand out span text without walking the
/// buffer from the start.
pub fn find_matches_with<'t>(
    spans: &[TextSpan],
    query: &str,
    case_sensitive: bool,
    mut slice: impl FnMut(TextSpan) -> Option<&'t str>,
) -> Vec<Match> {
    if query.is_empty() {
        return Vec::new();
    }

    let folded_query = fold_str(query, case_sensitive);
    let needle: &str = &folded_query;
    let needle_len = query.chars().count();
    let mut matches = Vec::new();

    for (span_index, span) in spans.iter().enumerate() {
        let Some(span_text) = slice(*span) else {
            continue;
        };
        let folded_span = fold_str(span_text, case_sensitive);
        let haystack: &str = &folded_span;

        let mut search_start = 0;
        // Running byte -> char conversion so each hit costs only the gap since the last one
        let mut counted_bytes = 0;
        let mut counted_chars = 0;

        while let Some(byte_pos) = haystack[search_start..].find(needle) {
            let absolute_byte_pos = search_start + byte_pos;
            counted_chars += haystack[counted_bytes..absolute_byte_pos].chars().count();
            counted_bytes = absolute_byte_pos;

            let start = span.start + counted_chars;
            matches.push(Match {
                span_index,
                start,
                end: start + needle_len,
            });

            // Step a single character, not the whole match, to keep overlapping hits
            let step = haystack[absolute_byte_pos..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
            search_start = absolute_byte_pos + step;
        }
    }

    matches
}

/// Case-normalize one character.
///
/// Characters whose lowercase form is longer than one character are left as
/// they are so folded text keeps the same character offsets as the buffer.
pub(crate) fn fold_char(c: char, case_sensitive: bool) -> char {
    if case_sensitive {
        return c;
    }

    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

fn fold_str(s: &str, case_sensitive: bool) -> Cow<'_, str> {
    if case_sensitive {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(s.chars().map(|c| fold_char(c, false)).collect())
    }
}

/// Character-offset slicing that remembers where the last lookup ended.
///
/// Lookups at or after the previous one continue from there; a lookup
/// further back starts over from the beginning of the text.
pub struct SpanSlicer<'t> {
    text: &'t str,
    char_pos: usize,
    byte_pos: usize,
}

impl<'t> SpanSlicer<'t> {
    pub fn new(text: &'t str) -> Self {
        Self {
            text,
            char_pos: 0,
            byte_pos: 0,
        }
    }

    /// Text covered by `span`, clamped to the end of the text
    pub fn slice(&mut self, span: TextSpan) -> Option<&'t str> {
        if span.is_empty() {
            return None;
        }

        let start = self.byte_at(span.start);
        let end = self.byte_at(span.end);
        (start < end).then(|| &self.text[start..end])
    }

    fn byte_at(&mut self, offset: usize) -> usize {
        if offset < self.char_pos {
            self.char_pos = 0;
            self.byte_pos = 0;
        }

        let rest = &self.text[self.byte_pos..];
        match rest.char_indices().nth(offset - self.char_pos) {
            Some((i, _)) => {
                self.byte_pos += i;
                self.char_pos = offset;
            }
            None => {
                self.char_pos += rest.chars().count();
                self.byte_pos = self.text.len();
            }
        }

        self.byte_pos
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
