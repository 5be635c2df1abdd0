//! The `explain` command: display documentation for error codes.

use seek_diagnostic::{ErrorCode, ErrorDocs};

/// Display detailed documentation for a given error code string.
pub fn explain_error(code_str: &str) {
    let Some(code) = ErrorCode::parse(code_str) else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX where X is a digit.");
        eprintln!("Known codes: {}", documented_codes());
        std::process::exit(1);
    };

    if let Some(doc) = ErrorDocs::get(code) {
        println!("{doc}");
    } else {
        eprintln!("No documentation available for {code_str}");
        std::process::exit(1);
    }
}

/// Comma-separated list of every documented code.
pub fn documented_codes() -> String {
    ErrorDocs::all_codes()
        .map(|code| code.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
