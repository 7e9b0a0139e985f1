//! Tests for document

use super::*;

fn doc(text: &str) -> Document {
    Document::new(text.to_string())
}

#[test]
fn test_line_count() {
    assert_eq!(doc("").line_count(), 1);
    assert_eq!(doc("one").line_count(), 1);
    assert_eq!(doc("one\ntwo").line_count(), 2);
    assert_eq!(doc("one\ntwo\n").line_count(), 3);
}

#[test]
fn test_line_range_excludes_terminator() {
    let d = doc("ab\r\ncd\nef");
    assert_eq!(d.line_range(0), Some(TextSpan::new(0, 2)));
    assert_eq!(d.line_range(1), Some(TextSpan::new(4, 6)));
    assert_eq!(d.line_range(2), Some(TextSpan::new(7, 9)));
    assert_eq!(d.line_range(3), None);
}

#[test]
fn test_line_chars() {
    let d = doc("héllo\nwörld");
    assert_eq!(d.line_chars(1), &['w', 'ö', 'r', 'l', 'd']);
    assert_eq!(d.line_len(0), 5);
    assert!(d.line_chars(9).is_empty());
}

#[test]
fn test_position_at() {
    let d = doc("ab\ncde\n");
    assert_eq!(d.position_at(0), Position::new(0, 0));
    assert_eq!(d.position_at(2), Position::new(0, 2));
    assert_eq!(d.position_at(3), Position::new(1, 0));
    assert_eq!(d.position_at(5), Position::new(1, 2));
    assert_eq!(d.position_at(7), Position::new(2, 0));
}

#[test]
fn test_position_at_clamps() {
    let d = doc("ab");
    assert_eq!(d.position_at(100), Position::new(0, 2));
}

#[test]
fn test_offset_at_round_trips_positions() {
    let d = doc("ab\ncde\nf");
    for offset in 0..d.char_len() {
        assert_eq!(d.offset_at(d.position_at(offset)), offset);
    }
}

#[test]
fn test_offset_at_clamps() {
    let d = doc("ab\ncde");
    assert_eq!(d.offset_at(Position::new(0, 10)), 2);
    assert_eq!(d.offset_at(Position::new(10, 1)), 4);
}

#[test]
fn test_max_line_width_counts_cells() {
    let d = doc("ab\n日本語\nxyz");
    assert_eq!(d.max_line_width(), 6);
    assert_eq!(doc("").max_line_width(), 0);
}

#[test]
fn test_visible_spans_cover_window() {
    let d = doc("line0\nline1\nline2\nline3");
    let spans = d.visible_spans(1, 2, 0, 80);
    assert_eq!(spans, vec![TextSpan::new(6, 11), TextSpan::new(12, 17)]);
}

#[test]
fn test_visible_spans_respect_horizontal_window() {
    let d = doc("abcdefgh\nab");
    let spans = d.visible_spans(0, 10, 2, 3);
    // Second line is entirely left of the window
    assert_eq!(spans, vec![TextSpan::new(2, 5)]);
}

#[test]
fn test_visible_spans_past_end() {
    let d = doc("one");
    assert!(d.visible_spans(5, 10, 0, 80).is_empty());
    assert!(d.visible_spans(0, 0, 0, 80).is_empty());
}

#[test]
fn test_view_exposes_document_to_jump_core() {
    let d = doc("abc");
    let view = d.view(vec![TextSpan::new(0, 2)]);
    assert_eq!(view.visible_spans(), vec![TextSpan::new(0, 2)]);
    assert_eq!(view.text(), "abc");
    assert_eq!(view.char_len(), 3);
    assert_eq!(view.char_at(2), Some('c'));
    assert_eq!(view.char_at(3), None);
}

#[test]
fn test_visible_spans_count_cells_for_wide_characters() {
    let d = doc("日本語日本語日本語日本語");
    // Ten cells hold five double-width characters
    assert_eq!(d.visible_spans(0, 1, 0, 10), vec![TextSpan::new(0, 5)]);
    assert_eq!(d.visible_spans(0, 1, 4, 6), vec![TextSpan::new(2, 5)]);
}

#[test]
fn test_line_window_drops_wide_character_cut_by_edges() {
    let d = doc("a日b");
    // Cell 1 is the left half of '日'
    assert_eq!(d.line_window(0, 0, 2), Some(TextSpan::new(0, 1)));
    assert_eq!(d.line_window(0, 2, 5), Some(TextSpan::new(2, 3)));
    assert_eq!(d.line_window(0, 9, 5), Some(TextSpan::new(3, 3)));
    assert_eq!(d.line_window(4, 0, 5), None);
}

#[test]
fn test_display_column_counts_cells() {
    let d = doc("ab\n日本x");
    assert_eq!(d.display_column(Position::new(0, 1)), 1);
    assert_eq!(d.display_column(Position::new(1, 2)), 4);
    assert_eq!(d.display_column(Position::new(1, 99)), 5);
}

#[test]
fn test_span_text_matches_character_slicing() {
    let text = "héllo\nwörld\nend";
    let d = doc(text);
    let chars: Vec<char> = text.chars().collect();

    for start in 0..chars.len() {
        for end in start + 1..=chars.len() {
            let expected: String = chars[start..end].iter().collect();
            assert_eq!(
                d.span_text(TextSpan::new(start, end)),
                Some(expected.as_str())
            );
        }
    }
}

#[test]
fn test_span_text_clamps_and_skips_empty() {
    let d = doc("wörld");
    assert_eq!(d.span_text(TextSpan::new(3, 100)), Some("ld"));
    assert_eq!(d.span_text(TextSpan::new(5, 9)), None);
    assert_eq!(d.span_text(TextSpan::new(2, 2)), None);
    assert_eq!(doc("ascii").span_text(TextSpan::new(1, 3)), Some("sc"));
}

#[test]
fn test_view_answers_span_text_from_document() {
    let d = doc("ééab\nééab");
    let view = d.view(vec![TextSpan::new(5, 9)]);
    assert_eq!(view.span_text(TextSpan::new(7, 9)), Some("ab"));
}
