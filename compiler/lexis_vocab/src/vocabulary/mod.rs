//! The `Vocabulary` abstraction and its array-backed default implementation.

use std::borrow::Cow;

use tracing::debug;

use crate::token_type::{TokenType, EOF};

/// Names attached to token types, as seen by lexers, parsers and
/// error reporting.
///
/// Every method accepts any integer. Unknown token types are not an error:
/// literal and symbolic lookups return `None`, and display names fall back
/// to the decimal form of the token type.
pub trait Vocabulary {
    /// Highest token type that may carry a name, or -1 if none do.
    ///
    /// Token types above this value have no literal, symbolic or display
    /// name (EOF excepted).
    fn max_token_type(&self) -> TokenType;

    /// Source text that defines `token_type`, e.g. `'if'`.
    fn literal_name(&self, token_type: TokenType) -> Option<&str>;

    /// Grammar identifier of `token_type`, e.g. `IF`.
    ///
    /// [`EOF`] is always named `"EOF"` unless a table says otherwise.
    fn symbolic_name(&self, token_type: TokenType) -> Option<&str>;

    /// Best name for `token_type` in diagnostics. Never empty.
    ///
    /// The default resolves through [`derived_display_name`].
    fn display_name(&self, token_type: TokenType) -> Cow<'_, str> {
        derived_display_name(self, token_type)
    }
}

/// Display name built from the literal and symbolic names alone.
///
/// Resolution order, first non-empty name wins:
/// 1. literal name
/// 2. symbolic name
/// 3. `token_type` in decimal (negative values included)
pub fn derived_display_name<V>(vocabulary: &V, token_type: TokenType) -> Cow<'_, str>
where
    V: Vocabulary + ?Sized,
{
    if let Some(name) = non_empty(vocabulary.literal_name(token_type)) {
        return Cow::Borrowed(name);
    }
    if let Some(name) = non_empty(vocabulary.symbolic_name(token_type)) {
        return Cow::Borrowed(name);
    }
    Cow::Owned(token_type.to_string())
}

#[inline]
fn non_empty(name: Option<&str>) -> Option<&str> {
    name.filter(|name| !name.is_empty())
}

/// Vocabulary with no names at all.
///
/// `display_name` renders every token type as its number, except [`EOF`]
/// which is `"EOF"`.
pub static EMPTY_VOCABULARY: VocabularyTable = VocabularyTable::empty();

/// Array-backed [`Vocabulary`]: index `i` of each table names token type `i`.
///
/// The three tables may have different lengths; lookups past the end of a
/// table behave like an absent entry. `None` means "no name" and is distinct
/// from an empty string.
///
/// # Thread Safety
/// Immutable after construction; share by reference across threads.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "cache",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "TableNames", into = "TableNames")
)]
pub struct VocabularyTable {
    literal_names: Vec<Option<String>>,
    symbolic_names: Vec<Option<String>>,
    /// Empty when display names derive from the other two tables.
    display_names: Vec<Option<String>>,
    max_token_type: TokenType,
}

impl VocabularyTable {
    /// Create a vocabulary from literal, symbolic and display names.
    ///
    /// Pass an empty `display_names` to derive display names from
    /// `literal_names` and `symbolic_names`.
    pub fn new(
        literal_names: Vec<Option<String>>,
        symbolic_names: Vec<Option<String>>,
        display_names: Vec<Option<String>>,
    ) -> Self {
        let max_token_type = max_token_type_for(&[
            literal_names.len(),
            symbolic_names.len(),
            display_names.len(),
        ]);
        VocabularyTable {
            literal_names,
            symbolic_names,
            display_names,
            max_token_type,
        }
    }

    /// A vocabulary with no names. Equal to [`EMPTY_VOCABULARY`].
    pub const fn empty() -> Self {
        VocabularyTable {
            literal_names: Vec::new(),
            symbolic_names: Vec::new(),
            display_names: Vec::new(),
            max_token_type: -1,
        }
    }

    /// Create a vocabulary from a legacy token-names array.
    ///
    /// Each entry is classified by its first character:
    /// - `'` marks a literal name (`'if'`)
    /// - an uppercase letter marks a symbolic name (`IF`)
    /// - anything else is neither
    ///
    /// The array itself becomes the display table, so every entry keeps
    /// rendering exactly as before.
    pub fn from_token_names(token_names: Vec<Option<String>>) -> Self {
        if token_names.is_empty() {
            return Self::empty();
        }

        let mut literal_names = Vec::with_capacity(token_names.len());
        let mut symbolic_names = Vec::with_capacity(token_names.len());
        for name in &token_names {
            let (literal, symbolic) = match name.as_deref().and_then(|n| n.chars().next()) {
                Some('\'') => (name.clone(), None),
                Some(first) if first.is_uppercase() => (None, name.clone()),
                _ => (None, None),
            };
            literal_names.push(literal);
            symbolic_names.push(symbolic);
        }

        debug!(
            count = token_names.len(),
            literals = literal_names.iter().flatten().count(),
            symbolics = symbolic_names.iter().flatten().count(),
            "split legacy token names"
        );

        Self::new(literal_names, symbolic_names, token_names)
    }

    /// Whether no table holds any entry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.max_token_type < 0
    }
}

impl Default for VocabularyTable {
    fn default() -> Self {
        Self::empty()
    }
}

impl Vocabulary for VocabularyTable {
    #[inline]
    fn max_token_type(&self) -> TokenType {
        self.max_token_type
    }

    #[inline]
    fn literal_name(&self, token_type: TokenType) -> Option<&str> {
        entry(&self.literal_names, token_type).flatten()
    }

    fn symbolic_name(&self, token_type: TokenType) -> Option<&str> {
        if let Some(name) = entry(&self.symbolic_names, token_type) {
            return name;
        }
        if token_type == EOF {
            return Some("EOF");
        }
        None
    }

    fn display_name(&self, token_type: TokenType) -> Cow<'_, str> {
        if let Some(name) = non_empty(entry(&self.display_names, token_type).flatten()) {
            return Cow::Borrowed(name);
        }
        derived_display_name(self, token_type)
    }
}

/// Table entry for `token_type`, or `None` when out of range.
///
/// The inner option is the entry itself: `Some(None)` is an in-range slot
/// with no name.
#[inline]
fn entry(names: &[Option<String>], token_type: TokenType) -> Option<Option<&str>> {
    let index = usize::try_from(token_type).ok()?;
    names.get(index).map(Option::as_deref)
}

/// Longest table length minus one. Lengths past `TokenType::MAX` saturate,
/// since no token type can index beyond that anyway.
fn max_token_type_for(lengths: &[usize]) -> TokenType {
    let longest = lengths.iter().copied().max().unwrap_or(0);
    TokenType::try_from(longest).map_or(TokenType::MAX, |len| len - 1)
}

/// Serialized form of a [`VocabularyTable`]; `max_token_type` is recomputed
/// on load.
#[cfg(feature = "cache")]
#[derive(serde::Serialize, serde::Deserialize)]
struct TableNames {
    literal_names: Vec<Option<String>>,
    symbolic_names: Vec<Option<String>>,
    #[serde(default)]
    display_names: Vec<Option<String>>,
}

#[cfg(feature = "cache")]
impl From<TableNames> for VocabularyTable {
    fn from(names: TableNames) -> Self {
        VocabularyTable::new(
            names.literal_names,
            names.symbolic_names,
            names.display_names,
        )
    }
}

#[cfg(feature = "cache")]
impl From<VocabularyTable> for TableNames {
    fn from(table: VocabularyTable) -> Self {
        TableNames {
            literal_names: table.literal_names,
            symbolic_names: table.symbolic_names,
            display_names: table.display_names,
        }
    }
}
