//! seek_lang CLI
//!
//! Runs seek_lang programs and inspects the front end.

use seekc::commands::{explain_error, lex_file, parse_file, parse_run_options, run_file, RunOptions};
use seekc::tracing_setup::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            if args.len() < 3 {
                print_run_usage();
                std::process::exit(1);
            }
            match parse_run_options(&args[2..]) {
                Ok(options) => run_file(&options),
                Err(msg) => {
                    eprintln!("error: {msg}");
                    eprintln!();
                    print_run_usage();
                    std::process::exit(1);
                }
            }
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: seek lex <file.seek>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: seek parse <file.seek>");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("seek_lang {}", env!("CARGO_PKG_VERSION"));
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: seek --explain <ERROR_CODE>");
                eprintln!("Example: seek --explain E2001");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        _ => {
            // A bare source path runs with default options
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("seek"))
            {
                run_file(&RunOptions::new(command.as_str()));
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn print_run_usage() {
    eprintln!("Usage: seek run <file.seek> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --player=X,Y        Player position (default: 0,0)");
    eprintln!("  --goal=X,Y          Goal position (default: 0,0)");
    eprintln!("  --budget=N          Maximum statements executed (default: 10000)");
    eprintln!("  --replay            Replay the moves on a board and report the outcome");
    eprintln!("  --board=WxH         Board size for --replay (default: 3x3)");
    eprintln!("  --max-moves=N       Moves replayed before giving up (default: 10)");
    eprintln!("  --color=<mode>      Diagnostic colors: auto, always, never");
}

fn print_usage() {
    println!("seek_lang: a tiny language for steering a robot to its goal");
    println!();
    println!("Usage: seek <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.seek>      Evaluate a program and print its moves");
    println!("  lex <file.seek>      Show the token stream");
    println!("  parse <file.seek>    Show the parsed program");
    println!("  --explain <code>     Explain an error code (e.g., E2001)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Run options:");
    println!("  --player=X,Y        Player position (default: 0,0)");
    println!("  --goal=X,Y          Goal position (default: 0,0)");
    println!("  --budget=N          Maximum statements executed (default: 10000)");
    println!("  --replay            Replay the moves on a board and report the outcome");
    println!("  --board=WxH         Board size for --replay (default: 3x3)");
    println!("  --max-moves=N       Moves replayed before giving up (default: 10)");
    println!("  --color=<mode>      Diagnostic colors: auto, always, never");
    println!();
    println!("Environment:");
    println!("  SEEK_LOG            Tracing filter, e.g. SEEK_LOG=seek_eval=debug");
    println!();
    println!("Examples:");
    println!("  seek run walk.seek --player=0,0 --goal=2,1 --replay");
    println!("  seek parse walk.seek");
    println!("  seek --explain E2005");
}
