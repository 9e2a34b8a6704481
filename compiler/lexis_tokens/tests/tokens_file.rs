//! End-to-end tests: generated `.tokens` files through to diagnostics.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::path::PathBuf;

use lexis_tokens::{parse_tokens, read_tokens_file, write_tokens};
use lexis_vocab::{format_expected, token_type_map, Vocabulary, EOF};
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn expr_vocabulary_names() {
    let vocab = read_tokens_file(fixture("Expr.tokens")).unwrap();

    assert_eq!(vocab.max_token_type(), 9);
    assert_eq!(vocab.literal_name(1), Some("'='"));
    assert_eq!(vocab.symbolic_name(1), Some("T__0"));
    assert_eq!(vocab.display_name(1), "'='");
    assert_eq!(vocab.display_name(7), "INT");
    assert_eq!(vocab.display_name(9), "WS");
    assert_eq!(vocab.display_name(10), "10");
    assert_eq!(vocab.display_name(EOF), "EOF");
}

#[test]
fn expr_vocabulary_diagnostics() {
    let vocab = read_tokens_file(fixture("Expr.tokens")).unwrap();
    assert_eq!(
        format_expected(&vocab, &[3, 7, 8, EOF]),
        "`'('`, `INT`, `ID`, or `<EOF>`"
    );
}

#[test]
fn expr_vocabulary_reverse_lookup() {
    let vocab = read_tokens_file(fixture("Expr.tokens")).unwrap();
    let map = token_type_map(&vocab);

    assert_eq!(map.get("'*'"), Some(&6));
    assert_eq!(map.get("STAR"), Some(&6));
    assert_eq!(map.get("EOF"), Some(&EOF));
    assert_eq!(map.get("'-'"), None);
}

#[test]
fn expr_vocabulary_rewrites_identically() {
    let source = std::fs::read_to_string(fixture("Expr.tokens")).unwrap();
    let vocab = parse_tokens(&source).unwrap();
    assert_eq!(write_tokens(&vocab).unwrap(), source);
}
