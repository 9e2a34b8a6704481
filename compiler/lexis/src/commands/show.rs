//! `lexis show`: tabulate every named token type.

use std::fmt::Write as _;

use lexis_vocab::Vocabulary;

use super::{load_vocabulary, NO_NAME};

/// Print the vocabulary table of a `.tokens` file.
pub fn show_file(path: &str) {
    let vocab = load_vocabulary(path);
    println!(
        "Vocabulary for '{}' (max token type {}):",
        path,
        vocab.max_token_type()
    );
    print!("{}", render_table(&vocab));
}

/// One row per token type in `0..=max_token_type`: type, literal,
/// symbolic and display name, in aligned columns.
pub fn render_table(vocab: &dyn Vocabulary) -> String {
    let header = ["TYPE", "LITERAL", "SYMBOLIC", "DISPLAY"];
    let rows: Vec<[String; 4]> = (0..=vocab.max_token_type())
        .map(|token_type| {
            [
                token_type.to_string(),
                vocab.literal_name(token_type).unwrap_or(NO_NAME).to_string(),
                vocab.symbolic_name(token_type).unwrap_or(NO_NAME).to_string(),
                vocab.display_name(token_type).into_owned(),
            ]
        })
        .collect();

    let mut widths = header.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut output = String::new();
    write_row(&mut output, &widths, header);
    for row in &rows {
        write_row(&mut output, &widths, row.each_ref().map(String::as_str));
    }
    output
}

fn write_row(output: &mut String, widths: &[usize; 4], cells: [&str; 4]) {
    let [type_cell, literal, symbolic, display] = cells;
    let _ = writeln!(
        output,
        "{type_cell:<w0$}  {literal:<w1$}  {symbolic:<w2$}  {display}",
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
    );
}
