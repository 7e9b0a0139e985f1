//! Tests for rendering

use ratatui::crossterm::event::KeyCode;
use ratatui::style::{Color, Modifier};

use crate::test_utils::test_helpers::{TEST_TEXT, key, render_app, row_text, test_app, type_keys};

const WIDTH: u16 = 30;
const HEIGHT: u16 = 8;

#[test]
fn test_labels_drawn_after_matches() {
    let mut app = test_app(TEST_TEXT);
    render_app(&mut app, WIDTH, HEIGHT);
    type_keys(&mut app, "at");
    let buffer = render_app(&mut app, WIDTH, HEIGHT);

    assert_eq!(
        row_text(&buffer, 1),
        // Each label covers the character after its match
        format!("│{:<28}│", "the catasatson the matd")
    );
    assert_eq!(buffer[(8, 1)].style().bg, Some(Color::Magenta));
    assert_eq!(buffer[(12, 1)].style().bg, Some(Color::Magenta));
    assert_eq!(buffer[(23, 1)].style().bg, Some(Color::Magenta));
}

#[test]
fn test_matches_highlighted() {
    let mut app = test_app(TEST_TEXT);
    render_app(&mut app, WIDTH, HEIGHT);
    type_keys(&mut app, "at");
    let buffer = render_app(&mut app, WIDTH, HEIGHT);

    // "at" of "cat" sits at columns 5..7
    assert_eq!(buffer[(6, 1)].style().bg, Some(Color::Yellow));
    assert_eq!(buffer[(7, 1)].style().bg, Some(Color::Yellow));
    assert_ne!(buffer[(5, 1)].style().bg, Some(Color::Yellow));
}

#[test]
fn test_input_box_shows_placeholder() {
    let mut app = test_app(TEST_TEXT);
    let buffer = render_app(&mut app, WIDTH, HEIGHT);

    assert!(row_text(&buffer, HEIGHT - 3).contains("Zoomiz"));
    assert!(row_text(&buffer, HEIGHT - 2).contains("Search..."));
}

#[test]
fn test_input_box_shows_match_counts() {
    let mut app = test_app(TEST_TEXT);
    render_app(&mut app, WIDTH, HEIGHT);
    type_keys(&mut app, "at");
    let buffer = render_app(&mut app, WIDTH, HEIGHT);

    assert!(row_text(&buffer, HEIGHT - 3).contains("(3/3)"));
    assert!(row_text(&buffer, HEIGHT - 2).contains("at"));
}

#[test]
fn test_no_matches_count_is_red() {
    let mut app = test_app(TEST_TEXT);
    render_app(&mut app, WIDTH, HEIGHT);
    type_keys(&mut app, "zz");
    let buffer = render_app(&mut app, WIDTH, HEIGHT);

    let row = row_text(&buffer, HEIGHT - 3);
    let x = row.chars().position(|c| c == '(').expect("count shown") as u16;
    assert_eq!(buffer[(x, HEIGHT - 3)].style().fg, Some(Color::Red));
}

#[test]
fn test_status_line_after_jump() {
    let mut app = test_app(TEST_TEXT);
    render_app(&mut app, WIDTH, HEIGHT);
    type_keys(&mut app, "ats");
    let buffer = render_app(&mut app, WIDTH, HEIGHT);

    let status = row_text(&buffer, HEIGHT - 1);
    assert!(status.starts_with(" 1:10"));
    assert!(status.contains("q quit"));
}

#[test]
fn test_viewer_cursor_is_reversed() {
    let mut app = test_app(TEST_TEXT);
    app.handle_key_event(key(KeyCode::Esc));
    let buffer = render_app(&mut app, WIDTH, HEIGHT);

    assert!(buffer[(1, 1)].style().add_modifier.contains(Modifier::REVERSED));
    assert!(!buffer[(2, 1)].style().add_modifier.contains(Modifier::REVERSED));
}

#[test]
fn test_labels_cleared_after_close() {
    let mut app = test_app(TEST_TEXT);
    render_app(&mut app, WIDTH, HEIGHT);
    type_keys(&mut app, "at");
    app.handle_key_event(key(KeyCode::Esc));
    let buffer = render_app(&mut app, WIDTH, HEIGHT);

    assert!(row_text(&buffer, 1).contains("the cat sat on the mat"));
}

#[test]
fn test_status_message_shown() {
    let mut app = test_app(TEST_TEXT);
    app.handle_key_event(key(KeyCode::Esc));
    app.set_status("hello");
    let buffer = render_app(&mut app, WIDTH, HEIGHT);

    assert!(row_text(&buffer, HEIGHT - 1).starts_with(" hello"));
}
