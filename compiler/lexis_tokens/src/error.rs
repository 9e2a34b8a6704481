//! Errors from reading and writing `.tokens` files.

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

use lexis_vocab::TokenType;

/// Failure to read, parse or write a `.tokens` file.
///
/// Parse errors carry the 1-based line number of the offending line.
/// Write errors carry the token type whose name the format cannot hold.
#[derive(Debug, Error)]
pub enum TokensFileError {
    #[error("line {line}: expected `name=type`, found `{text}`")]
    MissingAssignment { line: usize, text: String },

    #[error("line {line}: token name is empty")]
    EmptyName { line: usize },

    #[error("line {line}: invalid token type `{value}`")]
    InvalidType {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error(
        "line {line}: token type {value} is outside 0..={max}",
        max = crate::MAX_FILE_TOKEN_TYPE
    )]
    OutOfRange { line: usize, value: String },

    #[error("token type {token_type}: literal name `{name}` does not start with `'`")]
    UnquotedLiteral { token_type: TokenType, name: String },

    #[error("token type {token_type}: symbolic name `{name}` starts with `'`")]
    QuotedSymbolic { token_type: TokenType, name: String },

    #[error("token type {token_type}: name {name:?} has surrounding whitespace or a line break")]
    UnwritableName { token_type: TokenType, name: String },

    #[error(
        "token type {token_type} has names but is outside 0..={max}",
        max = crate::MAX_FILE_TOKEN_TYPE
    )]
    UnwritableType { token_type: TokenType },

    #[error("cannot read '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TokensFileError {
    /// Line the error points at, for parse errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            TokensFileError::MissingAssignment { line, .. }
            | TokensFileError::EmptyName { line }
            | TokensFileError::InvalidType { line, .. }
            | TokensFileError::OutOfRange { line, .. } => Some(*line),
            TokensFileError::UnquotedLiteral { .. }
            | TokensFileError::QuotedSymbolic { .. }
            | TokensFileError::UnwritableName { .. }
            | TokensFileError::UnwritableType { .. }
            | TokensFileError::Read { .. }
            | TokensFileError::Write { .. } => None,
        }
    }
}
