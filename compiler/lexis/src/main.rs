//! Lexis CLI
//!
//! Inspect the token vocabulary of a generated `.tokens` file.

use lexis::commands::{lookup_names, name_types, show_file};

fn main() {
    lexis::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "show" => {
            if args.len() < 3 {
                eprintln!("Usage: lexis show <file.tokens>");
                std::process::exit(1);
            }
            show_file(&args[2]);
        }
        "name" => {
            if args.len() < 4 {
                eprintln!("Usage: lexis name <file.tokens> <type>...");
                eprintln!("Example: lexis name Expr.tokens 1 2 -1");
                std::process::exit(1);
            }
            name_types(&args[2], &args[3..]);
        }
        "lookup" => {
            if args.len() < 4 {
                eprintln!("Usage: lexis lookup <file.tokens> <name>...");
                eprintln!("Example: lexis lookup Expr.tokens PLUS \"'+'\" EOF");
                std::process::exit(1);
            }
            lookup_names(&args[2], &args[3..]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("lexis {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Lexis (token vocabulary inspector)");
    println!();
    println!("Usage: lexis <command> [options]");
    println!();
    println!("Commands:");
    println!("  show <file.tokens>             List every token type with its names");
    println!("  name <file.tokens> <type>...   Show the display name of token types");
    println!("  lookup <file.tokens> <name>... Resolve literal or symbolic names to types");
    println!("  help                           Show this help message");
    println!("  version                        Show version information");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=lexis_tokens=debug) for trace output.");
}
