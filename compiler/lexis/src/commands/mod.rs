//! Command handlers for the lexis CLI.
//!
//! Each submodule implements one command. Rendering is split from printing
//! so the output can be checked without a terminal. Shared utilities like
//! `load_vocabulary` live here in the module root.

use std::error::Error as _;

use lexis_tokens::read_tokens_file;
use lexis_vocab::{Vocabulary, VocabularyTable};
use tracing::debug;

mod name;
mod show;

pub use name::{lookup_names, name_types, parse_token_types, render_display_names, render_lookup};
pub use show::{render_table, show_file};

/// Marker printed for an absent name.
pub(crate) const NO_NAME: &str = "-";

/// Load a `.tokens` file, or report the error and exit.
pub(crate) fn load_vocabulary(path: &str) -> VocabularyTable {
    match read_tokens_file(path) {
        Ok(vocab) => {
            debug!(path, max_token_type = vocab.max_token_type(), "loaded vocabulary");
            vocab
        }
        Err(e) => {
            eprintln!("error: {e}");
            let mut cause = e.source();
            while let Some(err) = cause {
                eprintln!("  caused by: {err}");
                cause = err.source();
            }
            if e.line().is_some() {
                eprintln!("  in '{path}'");
            }
            std::process::exit(1);
        }
    }
}
