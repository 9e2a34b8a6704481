//! Emitting vocabularies as `.tokens` files.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tracing::debug;

use lexis_vocab::{TokenType, Vocabulary};

use crate::error::TokensFileError;
use crate::reader::MAX_FILE_TOKEN_TYPE;

/// Render `vocabulary` in `.tokens` format.
///
/// Symbolic names come first, then literal names, each in ascending token
/// type order over `0..=max_token_type`. Absent and empty names are
/// skipped, so parsing the output reproduces every non-empty literal and
/// symbolic name. Display names are not part of the format.
///
/// Names the reader would classify or trim differently are rejected:
/// literal names must start with `'`, symbolic names must not, no name may
/// have surrounding whitespace or a line break, and named token types must
/// not exceed [`MAX_FILE_TOKEN_TYPE`].
pub fn write_tokens<V>(vocabulary: &V) -> Result<String, TokensFileError>
where
    V: Vocabulary + ?Sized,
{
    let mut output = String::new();
    let max_token_type = vocabulary.max_token_type();

    for token_type in 0..=max_token_type {
        if let Some(name) = vocabulary.symbolic_name(token_type).filter(|n| !n.is_empty()) {
            check_writable(token_type, name)?;
            if name.starts_with('\'') {
                return Err(TokensFileError::QuotedSymbolic {
                    token_type,
                    name: name.to_string(),
                });
            }
            let _ = writeln!(output, "{name}={token_type}");
        }
    }
    for token_type in 0..=max_token_type {
        if let Some(name) = vocabulary.literal_name(token_type).filter(|n| !n.is_empty()) {
            check_writable(token_type, name)?;
            if !name.starts_with('\'') {
                return Err(TokensFileError::UnquotedLiteral {
                    token_type,
                    name: name.to_string(),
                });
            }
            let _ = writeln!(output, "{name}={token_type}");
        }
    }

    Ok(output)
}

fn check_writable(token_type: TokenType, name: &str) -> Result<(), TokensFileError> {
    if token_type > MAX_FILE_TOKEN_TYPE {
        return Err(TokensFileError::UnwritableType { token_type });
    }
    if name.trim() != name || name.contains(['\n', '\r']) {
        return Err(TokensFileError::UnwritableName {
            token_type,
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Write `vocabulary` to `path` in `.tokens` format.
pub fn write_tokens_file<V>(path: impl AsRef<Path>, vocabulary: &V) -> Result<(), TokensFileError>
where
    V: Vocabulary + ?Sized,
{
    let path = path.as_ref();
    let contents = write_tokens(vocabulary)?;
    debug!(path = %path.display(), bytes = contents.len(), "writing tokens file");
    fs::write(path, contents).map_err(|source| TokensFileError::Write {
        path: path.to_path_buf(),
        source,
    })
}
