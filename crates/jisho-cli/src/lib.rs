// jisho-cli: shared utilities for CLI tools.

use std::process;

use jisho_core::{Candidate, Reason};

/// True if the argument list asks for help.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "-h" || a == "--help")
}

/// Print an error and exit with status 2.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(2);
}

/// Render one derivation path the way dictionary popups do:
/// innermost layer first, layers joined by " < ".
pub fn format_path(path: &[Reason]) -> String {
    if path.is_empty() {
        return "as-is".to_string();
    }
    path.iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(" < ")
}

/// One tab-separated line per candidate: word, class set, derivation paths.
pub fn format_candidate(candidate: &Candidate) -> String {
    let paths: Vec<String> = candidate
        .reasons
        .iter()
        .map(|p| format_path(p))
        .collect();
    format!(
        "{}\t{}\t{}",
        candidate.word,
        candidate.class,
        paths.join("; ")
    )
}
