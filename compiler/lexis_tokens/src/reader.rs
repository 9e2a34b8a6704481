//! Parsing `.tokens` files into vocabulary tables.

use std::fs;
use std::num::IntErrorKind;
use std::path::Path;

use tracing::{debug, trace};

use lexis_vocab::{TokenType, VocabularyTable};

use crate::error::TokensFileError;

/// Highest token type a `.tokens` file may assign.
///
/// Generated recognizers serialize token types as 16-bit values.
pub const MAX_FILE_TOKEN_TYPE: TokenType = 0xFFFF;

/// Parse the contents of a `.tokens` file.
///
/// - Blank lines are skipped; surrounding whitespace is ignored.
/// - The text before the last `=` is the name, so literals such as `'=='`
///   need no escaping.
/// - Names starting with `'` are literal names; all others are symbolic.
/// - A later assignment to the same slot replaces the earlier one.
///
/// The resulting table has no display names.
pub fn parse_tokens(source: &str) -> Result<VocabularyTable, TokensFileError> {
    let mut literal_names: Vec<Option<String>> = Vec::new();
    let mut symbolic_names: Vec<Option<String>> = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let text = raw.trim();
        if text.is_empty() {
            continue;
        }

        let Some((name, value)) = text.rsplit_once('=') else {
            return Err(TokensFileError::MissingAssignment {
                line,
                text: text.to_string(),
            });
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(TokensFileError::EmptyName { line });
        }
        let slot = parse_token_type(line, value.trim())?;

        let table = if name.starts_with('\'') {
            &mut literal_names
        } else {
            &mut symbolic_names
        };
        assign(table, usize::from(slot), name);
        trace!(line, token = name, token_type = slot, "token assignment");
    }

    debug!(
        literals = literal_names.iter().flatten().count(),
        symbolics = symbolic_names.iter().flatten().count(),
        "parsed tokens file"
    );
    Ok(VocabularyTable::new(literal_names, symbolic_names, Vec::new()))
}

/// Read and parse a `.tokens` file from disk.
pub fn read_tokens_file(path: impl AsRef<Path>) -> Result<VocabularyTable, TokensFileError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading tokens file");
    let source = fs::read_to_string(path).map_err(|source| TokensFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_tokens(&source)
}

fn parse_token_type(line: usize, value: &str) -> Result<u16, TokensFileError> {
    let out_of_range = || TokensFileError::OutOfRange {
        line,
        value: value.to_string(),
    };
    match value.parse::<i64>() {
        Ok(token_type) => u16::try_from(token_type).map_err(|_| out_of_range()),
        Err(source) => match source.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Err(out_of_range()),
            _ => Err(TokensFileError::InvalidType {
                line,
                value: value.to_string(),
                source,
            }),
        },
    }
}

fn assign(table: &mut Vec<Option<String>>, slot: usize, name: &str) {
    if table.len() <= slot {
        table.resize(slot + 1, None);
    }
    table[slot] = Some(name.to_string());
}
