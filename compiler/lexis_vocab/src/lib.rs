//! Lexis Vocabulary - Token Type Names
//!
//! Maps the integer token types produced by a lexer/parser to the names a
//! human reads:
//! - Literal names: the source text that defines a token (`'if'`, `'+'`)
//! - Symbolic names: the identifier used in grammar source (`IF`, `PLUS`)
//! - Display names: the single best name for diagnostics
//!
//! # Design
//!
//! - **Total display names**: [`Vocabulary::display_name`] renders every
//!   integer, falling back to its decimal form, so diagnostics never fail on
//!   an unknown token type.
//! - **Immutable tables**: a [`VocabularyTable`] is read-only after
//!   construction and freely shared across threads.
//! - **Substitutable**: consumers take `&dyn Vocabulary`, so generated
//!   per-grammar vocabularies can stand in for the table.

mod expected;
pub mod token_type;
mod type_map;
mod vocabulary;

pub use expected::{element_name, format_expected};
pub use token_type::{TokenType, EOF, EPSILON, INVALID_TYPE, MIN_USER_TOKEN_TYPE};
pub use type_map::token_type_map;
pub use vocabulary::{derived_display_name, Vocabulary, VocabularyTable, EMPTY_VOCABULARY};
