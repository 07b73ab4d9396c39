use crate::SourceBuffer;

// === Basic Navigation ===

#[test]
fn starts_at_first_byte() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert!(cursor.at(b"abc"));
}

#[test]
fn advance_moves_forward() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert!(cursor.at(b"bc"));
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_n_moves_multiple() {
    let buf = SourceBuffer::new("abcdef");
    let mut cursor = buf.cursor();
    cursor.advance_n(3);
    assert!(cursor.at(b"def"));
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn rest_is_unread_input() {
    let buf = SourceBuffer::new("ab");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.rest(), b"b");
    cursor.advance();
    assert!(cursor.rest().is_empty());
}

// === EOF Detection ===

#[test]
fn is_eof_on_empty_source() {
    let buf = SourceBuffer::new("");
    assert!(buf.cursor().is_eof());
}

#[test]
fn is_eof_after_last_byte() {
    let buf = SourceBuffer::new("x");
    let mut cursor = buf.cursor();
    assert!(!cursor.is_eof());
    cursor.advance();
    assert!(cursor.is_eof());
}

#[test]
fn interior_null_is_not_eof() {
    let buf = SourceBuffer::new("a\0b");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert!(cursor.at(b"\0"));
    assert!(!cursor.is_eof());
}

// === Prefix Matching ===

#[test]
fn at_matches_prefix() {
    let buf = SourceBuffer::new("{% if %}");
    let cursor = buf.cursor();
    assert!(cursor.at(b"{%"));
    assert!(!cursor.at(b"{{"));
}

#[test]
fn at_fails_when_prefix_runs_past_end() {
    let buf = SourceBuffer::new("{");
    assert!(!buf.cursor().at(b"{{"));
}

// === Slice ===

#[test]
fn slice_extracts_substring() {
    let buf = SourceBuffer::new("hello world");
    let cursor = buf.cursor();
    assert_eq!(cursor.slice(0, 5), "hello");
    assert_eq!(cursor.slice(6, 11), "world");
}

#[test]
fn slice_from_extracts_to_current() {
    let buf = SourceBuffer::new("abcdef");
    let mut cursor = buf.cursor();
    cursor.advance_n(3);
    assert_eq!(cursor.slice_from(0), "abc");
    assert_eq!(cursor.slice_from(3), "");
}

// === Markup Search ===

#[test]
fn skip_to_markup_start_stops_on_variable() {
    let buf = SourceBuffer::new("Hi {{ name }}");
    let mut cursor = buf.cursor();
    assert!(cursor.skip_to_markup_start());
    assert_eq!(cursor.pos(), 3);
    assert!(cursor.at(b"{{"));
}

#[test]
fn skip_to_markup_start_stops_on_tag_and_empty_braces() {
    let buf = SourceBuffer::new("a{%");
    let mut cursor = buf.cursor();
    assert!(cursor.skip_to_markup_start());
    assert_eq!(cursor.pos(), 1);

    let buf = SourceBuffer::new("ab{}");
    let mut cursor = buf.cursor();
    assert!(cursor.skip_to_markup_start());
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn skip_to_markup_start_ignores_lone_braces() {
    let buf = SourceBuffer::new("{ a { b } {x");
    let mut cursor = buf.cursor();
    assert!(!cursor.skip_to_markup_start());
    assert!(cursor.is_eof());
}

#[test]
fn skip_to_markup_start_brace_at_end() {
    let buf = SourceBuffer::new("text{");
    let mut cursor = buf.cursor();
    assert!(!cursor.skip_to_markup_start());
    assert_eq!(cursor.pos(), 5);
}

#[test]
fn skip_to_markup_start_does_not_look_behind() {
    let buf = SourceBuffer::new("{{x");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert!(!cursor.skip_to_markup_start());
    assert!(cursor.is_eof());
}

#[test]
fn skip_to_markup_start_across_multibyte_text() {
    let source = "d\u{e9}j\u{e0} vu {%";
    let buf = SourceBuffer::new(source);
    let mut cursor = buf.cursor();
    assert!(cursor.skip_to_markup_start());
    assert_eq!(cursor.slice_from(0), "d\u{e9}j\u{e0} vu ");
}

// === Needle Search ===

#[test]
fn eat_past_moves_after_needle() {
    let buf = SourceBuffer::new("{% if %} rest");
    let mut cursor = buf.cursor();
    cursor.advance_n(2);
    assert!(cursor.eat_past(b"%}"));
    assert_eq!(cursor.pos(), 8);
    assert_eq!(cursor.slice_from(0), "{% if %}");
}

#[test]
fn eat_past_missing_needle_leaves_cursor() {
    let buf = SourceBuffer::new("{% if");
    let mut cursor = buf.cursor();
    cursor.advance_n(2);
    assert!(!cursor.eat_past(b"%}"));
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn eat_past_at_eof() {
    let buf = SourceBuffer::new("ab");
    let mut cursor = buf.cursor();
    cursor.advance_n(2);
    assert!(!cursor.eat_past(b"%}"));
    assert!(cursor.is_eof());
}

// === Newline Search ===

#[test]
fn eat_until_newline_stops_on_newline() {
    let buf = SourceBuffer::new("assign a = 1\necho a");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert!(cursor.at(b"\necho"));
    assert_eq!(cursor.pos(), 12);
}

#[test]
fn eat_until_newline_without_newline_reaches_eof() {
    let buf = SourceBuffer::new("echo a");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert!(cursor.is_eof());
}

// === Snapshots ===

#[test]
fn copy_snapshot_restores_position() {
    let buf = SourceBuffer::new("{{ a {% b");
    let mut cursor = buf.cursor();
    let snapshot = cursor;
    cursor.advance_n(5);
    assert_eq!(cursor.pos(), 5);
    cursor = snapshot;
    assert_eq!(cursor.pos(), 0);
}
