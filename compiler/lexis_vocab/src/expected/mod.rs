//! Rendering expected-token sets for "expected X, found Y" diagnostics.

use std::borrow::Cow;

use rustc_hash::FxHashSet;

use crate::token_type::{TokenType, EOF, EPSILON};
use crate::vocabulary::Vocabulary;

/// Name of a single element of an expected-token set.
///
/// The reserved types render in angle brackets (`<EOF>`, `<EPSILON>`);
/// everything else uses [`Vocabulary::display_name`].
pub fn element_name<V>(vocabulary: &V, token_type: TokenType) -> Cow<'_, str>
where
    V: Vocabulary + ?Sized,
{
    match token_type {
        EOF => Cow::Borrowed("<EOF>"),
        EPSILON => Cow::Borrowed("<EPSILON>"),
        _ => vocabulary.display_name(token_type),
    }
}

/// Format expected token types as a human-readable list.
///
/// Returns "`;`, `)`, or `ID`" for several tokens, "`(` or `ID`" for two,
/// "`(`" for one, and "nothing" for none. Duplicates are dropped; the
/// first occurrence fixes the position.
pub fn format_expected<V>(vocabulary: &V, expected: &[TokenType]) -> String
where
    V: Vocabulary + ?Sized,
{
    let mut seen = FxHashSet::default();
    let names: Vec<Cow<'_, str>> = expected
        .iter()
        .copied()
        .filter(|token_type| seen.insert(*token_type))
        .map(|token_type| element_name(vocabulary, token_type))
        .collect();

    match names.as_slice() {
        [] => "nothing".to_string(),
        [single] => format!("`{single}`"),
        [first, second] => format!("`{first}` or `{second}`"),
        [rest @ .., last] => {
            let rest_str = rest
                .iter()
                .map(|n| format!("`{n}`"))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{rest_str}, or `{last}`")
        }
    }
}
