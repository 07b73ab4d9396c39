use super::*;
use pretty_assertions::assert_eq;

// === Classification ===

#[test]
fn classify_by_leading_bytes() {
    assert_eq!(TokenKind::classify("{% if a %}"), TokenKind::Tag);
    assert_eq!(TokenKind::classify("{{ a }}"), TokenKind::Variable);
    assert_eq!(TokenKind::classify("plain"), TokenKind::Text);
    assert_eq!(TokenKind::classify(""), TokenKind::Text);
}

#[test]
fn classify_degenerate_openers() {
    assert_eq!(TokenKind::classify("{%"), TokenKind::Tag);
    assert_eq!(TokenKind::classify("{{"), TokenKind::Variable);
}

#[test]
fn classify_tag_opened_inside_variable() {
    assert_eq!(TokenKind::classify("{{ {% if a %}"), TokenKind::Tag);
    assert_eq!(TokenKind::classify("{{ {}% x %}"), TokenKind::Tag);
}

#[test]
fn classify_variable_ending_in_percent_brace() {
    assert_eq!(TokenKind::classify("{{ }%}"), TokenKind::Variable);
    assert_eq!(TokenKind::classify("{{%}}"), TokenKind::Variable);
    assert_eq!(TokenKind::classify("{{ a %}}"), TokenKind::Variable);
}

#[test]
fn classify_lone_brace_is_text() {
    assert_eq!(TokenKind::classify("{"), TokenKind::Text);
    assert_eq!(TokenKind::classify("{} x"), TokenKind::Text);
    assert_eq!(TokenKind::classify(" {{ x }}"), TokenKind::Text);
}

#[test]
fn kind_display() {
    assert_eq!(TokenKind::Text.to_string(), "Text");
    assert_eq!(TokenKind::Variable.to_string(), "Variable");
    assert_eq!(TokenKind::Tag.to_string(), "Tag");
}

// === Span ===

#[test]
fn span_len_and_display() {
    let span = Span::new(3, 10);
    assert_eq!(span.len(), 7);
    assert!(!span.is_empty());
    assert_eq!(span.to_string(), "3..10");
    assert!(Span::new(4, 4).is_empty());
}

// === Token ===

#[test]
fn token_accessors() {
    let token = Token::new("{{ x }}", Span::new(5, 12));
    assert_eq!(token.text(), "{{ x }}");
    assert_eq!(token.span(), Span::new(5, 12));
    assert_eq!(token.len(), 7);
    assert!(!token.is_empty());
    assert_eq!(token.kind(), TokenKind::Variable);
    assert_eq!(token.to_string(), "{{ x }}");
    assert!(token == "{{ x }}");
}

#[test]
fn newline_count_counts_lf_only() {
    assert_eq!(Token::new("abc", Span::new(0, 3)).newline_count(), 0);
    assert_eq!(Token::new("a\nb\n", Span::new(0, 4)).newline_count(), 2);
    assert_eq!(Token::new("a\r\nb", Span::new(0, 4)).newline_count(), 1);
    assert_eq!(Token::new("\r", Span::new(0, 1)).newline_count(), 0);
}
