use std::io::BufRead;

use regex::Regex;

use crate::roster::entry::is_integer;
use crate::roster::{parse_entry, Record, TableKey};

/// Reads car numbers for one table line by line until a `#` terminator (or
/// EOF). Numbers may come several per line; non-numeric tokens are skipped
/// with a warning and never abort the collection.
pub fn collect_numbers<R: BufRead>(input: R, table: TableKey) -> std::io::Result<Vec<u32>> {
    println!(
        "Enter the numbers used this season for {} (finish with #):",
        table
    );

    let mut numbers = Vec::new();
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line == "#" {
            break;
        }
        if line.is_empty() {
            continue;
        }
        for token in line.split_whitespace() {
            match parse_number(token) {
                Some(number) => numbers.push(number),
                None => println!("  ⚠️ skipping non-numeric entry: {}", token),
            }
        }
    }

    Ok(numbers)
}

/// Splits a raw number list on commas and/or whitespace. Returns the valid
/// numbers and the tokens that were skipped, so the caller can report them.
pub fn parse_number_list(raw: &str) -> (Vec<u32>, Vec<String>) {
    let separators = Regex::new(r"[,\s]+").unwrap();

    let mut numbers = Vec::new();
    let mut skipped = Vec::new();
    for token in separators.split(raw.trim()).filter(|t| !t.is_empty()) {
        match parse_number(token) {
            Some(number) => numbers.push(number),
            None => skipped.push(token.to_string()),
        }
    }

    (numbers, skipped)
}

/// Resolves a free-form `[name] number [idle]` edit string with the same
/// tokenizer the reader uses. `None` means the string matches neither shape
/// and the caller should report it instead of guessing.
pub fn parse_edit_entry(raw: &str) -> Option<Record> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    parse_entry(&tokens)
}

fn parse_number(token: &str) -> Option<u32> {
    if is_integer(token) {
        token.parse().ok()
    } else {
        None
    }
}
