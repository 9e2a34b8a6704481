//! `lexis name` and `lexis lookup`: resolve between token types and names.

use std::fmt::Write as _;

use lexis_vocab::{token_type_map, TokenType, Vocabulary};

use super::load_vocabulary;

/// Print the display name of each token type given on the command line.
pub fn name_types(path: &str, args: &[String]) {
    let token_types = match parse_token_types(args) {
        Ok(token_types) => token_types,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    };
    let vocab = load_vocabulary(path);
    print!("{}", render_display_names(&vocab, &token_types));
}

/// Print the token type of each name given on the command line.
pub fn lookup_names(path: &str, names: &[String]) {
    let vocab = load_vocabulary(path);
    print!("{}", render_lookup(&vocab, names));
}

/// Parse command-line token types. Any integer is accepted, negative
/// values included.
pub fn parse_token_types(args: &[String]) -> Result<Vec<TokenType>, String> {
    args.iter()
        .map(|arg| {
            arg.parse::<TokenType>()
                .map_err(|_| format!("'{arg}' is not a token type"))
        })
        .collect()
}

/// `<type>\t<display name>` per token type.
pub fn render_display_names(vocab: &dyn Vocabulary, token_types: &[TokenType]) -> String {
    let mut output = String::new();
    for &token_type in token_types {
        let _ = writeln!(output, "{token_type}\t{}", vocab.display_name(token_type));
    }
    output
}

/// `<name>\t<type>` per name, or `<unknown>` for names the vocabulary
/// does not define.
pub fn render_lookup(vocab: &dyn Vocabulary, names: &[String]) -> String {
    let map = token_type_map(vocab);
    let mut output = String::new();
    for name in names {
        match map.get(name.as_str()) {
            Some(token_type) => {
                let _ = writeln!(output, "{name}\t{token_type}");
            }
            None => {
                let _ = writeln!(output, "{name}\t<unknown>");
            }
        }
    }
    output
}
