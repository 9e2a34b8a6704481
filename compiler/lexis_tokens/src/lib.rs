//! Lexis Tokens - `.tokens` Vocabulary Files
//!
//! Code generators publish a grammar's vocabulary as a `.tokens` file so
//! other tools (importing grammars, highlighters, test harnesses) can name
//! token types without linking the generated lexer:
//!
//! ```text
//! IF=1
//! ID=2
//! 'if'=1
//! '=='=3
//! ```
//!
//! Each line assigns a token type to either a symbolic name or a quoted
//! literal name. Reading yields a [`VocabularyTable`](lexis_vocab::VocabularyTable)
//! with derived display names.

mod error;
mod reader;
mod writer;

pub use error::TokensFileError;
pub use reader::{parse_tokens, read_tokens_file, MAX_FILE_TOKEN_TYPE};
pub use writer::{write_tokens, write_tokens_file};
