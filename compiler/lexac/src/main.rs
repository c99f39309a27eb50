//! Lexa scanner CLI.

use std::io;

use lexac::commands::{explain_error, lex_file, parse_lex_options, LexOptions, Status};
use lexac::tracing_setup::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    // No arguments: ask for the file interactively.
    if args.len() < 2 {
        std::process::exit(lex_file(&LexOptions::default()).code());
    }

    let command = &args[1];

    let status = match command.as_str() {
        "lex" => match parse_lex_options(&args[2..]) {
            Ok(options) => lex_file(&options),
            Err(err) => {
                eprintln!("error: {err}");
                eprintln!();
                print_lex_usage();
                Status::Failure
            }
        },
        "explain" | "--explain" => {
            if args.len() < 3 {
                eprintln!("Usage: lexa explain <ERROR_CODE>");
                eprintln!("Example: lexa explain E0002");
                Status::Failure
            } else {
                explain_error(&args[2], &mut io::stdout(), &mut io::stderr())
                    .unwrap_or(Status::Failure)
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Status::Clean
        }
        "version" | "--version" | "-V" => {
            println!("Lexa scanner {}", env!("CARGO_PKG_VERSION"));
            Status::Clean
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            Status::Failure
        }
    };

    std::process::exit(status.code());
}

fn print_lex_usage() {
    eprintln!("Usage: lexa lex [file] [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --format=<fmt>      Output format: table (default), json");
    eprintln!("  --json              Same as --format=json");
    eprintln!("  --color=<mode>      Diagnostic colors: auto (default), always, never");
    eprintln!("  --no-tags           Leave automaton tags off the tokens");
    eprintln!("  --quiet-comments    Do not report block comments left open at end of input");
}

fn print_usage() {
    println!("Lexa scanner");
    println!();
    println!("Usage: lexa <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex [file]           Scan a file and list its tokens (asks for a path if omitted)");
    println!("  explain <code>       Explain a diagnostic code (e.g., E0002)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --format=<fmt>       Output format: table (default), json");
    println!("  --json               Same as --format=json");
    println!("  --color=<mode>       Diagnostic colors: auto (default), always, never");
    println!("  --no-tags            Leave automaton tags off the tokens");
    println!("  --quiet-comments     Do not report block comments left open at end of input");
    println!();
    println!("Exit status:");
    println!("  0  no diagnostics");
    println!("  1  diagnostics were reported");
    println!("  2  usage error or unreadable file");
    println!();
    println!("Examples:");
    println!("  lexa lex main.lx");
    println!("  lexa lex main.lx --format=json");
    println!("  lexa lex main.lx --no-tags --color=never");
    println!("  lexa explain E0001");
    println!("  RUST_LOG=lexa_lexer=trace lexa lex main.lx");
}
