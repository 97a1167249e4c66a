use super::lexer::{Span, TokenKind, lex, token_text};

fn snapshot(source: &str) -> String {
    lex(source)
        .iter()
        .map(|t| format!("{:?} {:?}", t.kind, token_text(source, t)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn punctuation_and_words() {
    insta::assert_snapshot!(snapshot("add [-f | --force] <file>..."), @r#"
    Word "add"
    BracketOpen "["
    Word "-f"
    Pipe "|"
    Word "--force"
    BracketClose "]"
    Placeholder "<file>"
    Ellipsis "..."
    "#);
}

#[test]
fn typed_placeholder_is_one_token() {
    insta::assert_snapshot!(snapshot("(<n:int>)"), @r#"
    ParenOpen "("
    Placeholder "<n:int>"
    ParenClose ")"
    "#);
}

#[test]
fn words_keep_inner_dots() {
    insta::assert_snapshot!(snapshot("cat a.txt --out=x.json"), @r#"
    Word "cat"
    Word "a.txt"
    Word "--out=x.json"
    "#);
}

#[test]
fn trailing_ellipsis_splits_off_word() {
    insta::assert_snapshot!(snapshot("file... a.txt..."), @r#"
    Word "file"
    Ellipsis "..."
    Word "a.txt"
    Ellipsis "..."
    "#);
}

#[test]
fn ellipsis_spans_point_into_source() {
    let tokens = lex("ab...");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].span, Span::new(0, 2));
    assert_eq!(tokens[1].span, Span::new(2, 5));
    assert_eq!(tokens[1].kind, TokenKind::Ellipsis);
}

#[test]
fn garbage_is_coalesced() {
    insta::assert_snapshot!(snapshot("a $$b"), @r#"
    Word "a"
    Garbage "$$"
    Word "b"
    "#);
}

#[test]
fn trailing_garbage_runs_to_end() {
    let tokens = lex("a ~~");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1].kind, TokenKind::Garbage);
    assert_eq!(tokens[1].span, Span::new(2, 4));
}

#[test]
fn whitespace_only_is_empty() {
    assert!(lex(" \t\n").is_empty());
    assert!(lex("").is_empty());
}
