//! Reverse lookup from token names to token types.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::token_type::{TokenType, EOF};
use crate::vocabulary::Vocabulary;

/// Map every literal and symbolic name in `vocabulary` to its token type.
///
/// Scans token types `0..=max_token_type`; empty names are skipped.
/// `"EOF"` always maps to [`EOF`]. When two token types share a name, the
/// higher token type wins.
pub fn token_type_map<V>(vocabulary: &V) -> FxHashMap<String, TokenType>
where
    V: Vocabulary + ?Sized,
{
    let mut map = FxHashMap::default();
    for token_type in 0..=vocabulary.max_token_type() {
        let literal = vocabulary.literal_name(token_type);
        let symbolic = vocabulary.symbolic_name(token_type);
        for name in [literal, symbolic].into_iter().flatten() {
            if !name.is_empty() {
                map.insert(name.to_string(), token_type);
            }
        }
    }
    map.insert("EOF".to_string(), EOF);

    debug!(
        entries = map.len(),
        max_token_type = vocabulary.max_token_type(),
        "built token type map"
    );
    map
}
