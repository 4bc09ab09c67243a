use regex::Regex;

use super::entry::parse_entry;
use super::{Roster, TableKey, HEADER_MARKER};

/// Parses the roster file text into both tables, accepting either of the two
/// legacy layouts.
///
/// The layout is probed once per parse: if any non-blank line mentions both
/// table names it is the side-by-side format, otherwise the sequential-block
/// format. Both strategies share the entry tokenizer; a line that fails to
/// tokenize simply contributes no record.
pub fn read_roster(text: &str) -> Roster {
    let lines: Vec<&str> = text.lines().collect();

    let side_by_side = lines.iter().any(|line| {
        !line.trim().is_empty()
            && line.contains(TableKey::C1.as_str())
            && line.contains(TableKey::C2.as_str())
    });

    let mut roster = if side_by_side {
        read_side_by_side(&lines)
    } else {
        read_sequential(&lines)
    };

    roster.c1.sort_by_key(|r| r.number);
    roster.c2.sort_by_key(|r| r.number);
    roster
}

/// Side-by-side layout: two columns per row, separated by 2+ tabs or a run
/// of 3+ whitespace characters.
fn read_side_by_side(lines: &[&str]) -> Roster {
    let column_gap = Regex::new(r"\t{2,}|\s{3,}").unwrap();
    let mut roster = Roster::default();

    for raw_line in lines {
        let stripped = raw_line.trim();
        if stripped.is_empty() {
            continue;
        }

        // Header, legend, and summary lines all carry the marker word.
        if stripped.contains(HEADER_MARKER) {
            continue;
        }
        if stripped.contains(TableKey::C1.as_str())
            && stripped.contains(TableKey::C2.as_str())
            && !stripped.chars().any(|c| c.is_ascii_digit())
        {
            continue;
        }

        // A row opening with whitespace has an empty left cell; the whole
        // line belongs to C2.
        if raw_line.starts_with(char::is_whitespace) {
            let tokens: Vec<&str> = stripped.split_whitespace().collect();
            if let Some(record) = parse_entry(&tokens) {
                roster.c2.push(record);
            }
            continue;
        }

        let cells: Vec<&str> = column_gap.split(raw_line).collect();
        if cells.len() >= 2 {
            // Each cell tokenizes independently; one failing does not drag
            // the other down. Cells past the second are ignored.
            let left: Vec<&str> = cells[0].split_whitespace().collect();
            if let Some(record) = parse_entry(&left) {
                roster.c1.push(record);
            }
            let right: Vec<&str> = cells[1].split_whitespace().collect();
            if let Some(record) = parse_entry(&right) {
                roster.c2.push(record);
            }
        } else {
            // No column gap: the row only has a left cell.
            let tokens: Vec<&str> = stripped.split_whitespace().collect();
            if let Some(record) = parse_entry(&tokens) {
                roster.c1.push(record);
            }
        }
    }

    roster
}

/// Sequential-block layout: a bare `C1` or `C2` line opens a block and every
/// following record line belongs to it. Lines before the first block marker
/// are dropped.
fn read_sequential(lines: &[&str]) -> Roster {
    let mut roster = Roster::default();
    let mut current: Option<TableKey> = None;

    for raw_line in lines {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if line == TableKey::C1.as_str() {
            current = Some(TableKey::C1);
            continue;
        }
        if line == TableKey::C2.as_str() {
            current = Some(TableKey::C2);
            continue;
        }

        if line.starts_with(HEADER_MARKER) {
            continue;
        }

        if let Some(key) = current {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if let Some(record) = parse_entry(&tokens) {
                roster.table_mut(key).push(record);
            }
        }
    }

    roster
}
