//! Reserved token types.
//!
//! User token types start at [`MIN_USER_TOKEN_TYPE`]; everything at or below
//! [`INVALID_TYPE`] is reserved by the runtime.

/// Integer identifier of a token category.
pub type TokenType = i32;

/// End of input. Never stored in a vocabulary table; always named `"EOF"`.
pub const EOF: TokenType = -1;

/// Empty transition marker used when computing expected-token sets.
pub const EPSILON: TokenType = -2;

/// Placeholder for an unassigned token type (index 0 of every table).
pub const INVALID_TYPE: TokenType = 0;

/// First token type available to grammars.
pub const MIN_USER_TOKEN_TYPE: TokenType = 1;
