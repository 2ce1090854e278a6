// jisho-baseform: recover dictionary-form candidates for conjugated words.
//
// Words are taken from the command line, or from stdin (one per line)
// when none are given. Each word prints a block: the word itself, then
// one line per candidate with its dictionary form, word classes, and the
// grammatical layers that were peeled off.
//
// Usage:
//   jisho-baseform [--json] [WORD ...]
//
// Options:
//   --json       Print one JSON object per word instead of text
//   -h, --help   Print help

use std::io::{self, BufRead, Write};

use jisho_deinflect::Deinflector;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if jisho_cli::wants_help(&args) {
        println!("jisho-baseform: recover dictionary-form candidates for conjugated words.");
        println!();
        println!("Usage: jisho-baseform [--json] [WORD ...]");
        println!();
        println!("Reads words from the command line, or from stdin (one per");
        println!("line) when none are given.");
        println!();
        println!("Options:");
        println!("  --json       Print one JSON object per word instead of text");
        println!("  -h, --help   Print this help");
        return;
    }

    let mut json = false;
    let mut words: Vec<String> = Vec::new();
    for arg in args {
        match arg.as_str() {
            "--json" => json = true,
            flag if flag.starts_with('-') => {
                jisho_cli::fatal(&format!("unknown option: {flag}"));
            }
            _ => words.push(arg),
        }
    }

    if words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if !word.is_empty() {
                words.push(word.to_string());
            }
        }
    }

    let engine = Deinflector::new();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for word in &words {
        let candidates = engine.deinflect(word);
        if json {
            let value = serde_json::json!({
                "input": word,
                "candidates": candidates,
            });
            let _ = writeln!(out, "{value}");
        } else {
            let _ = writeln!(out, "{word}");
            for candidate in &candidates {
                let _ = writeln!(out, "  {}", jisho_cli::format_candidate(candidate));
            }
            let _ = writeln!(out);
        }
    }
}
