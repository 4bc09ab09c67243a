use super::{Record, Roster, TableKey, HEADER_MARKER};

/// Gap between the C1 and C2 cells of a row. Two tabs, which the reader's
/// column-gap pattern recognizes.
const COLUMN_GAP: &str = "\t\t";
const SUB_HEADER: &str = "driver number idle";
const LEGEND_LINE: &str = "number range: 0, 2-999 unassigned";
const TRAILER_LINE: &str = "see the number ledger for driver assignments";

/// Serializes the roster into the canonical dual-column layout.
///
/// Every non-record line contains the marker word (`number`), so the text
/// round-trips through the side-by-side branch of the reader: same records,
/// same order.
pub fn write_roster(roster: &Roster) -> String {
    let mut rows1: Vec<&Record> = roster.c1.iter().collect();
    rows1.sort_by_key(|r| r.number);
    let mut rows2: Vec<&Record> = roster.c2.iter().collect();
    rows2.sort_by_key(|r| r.number);

    let mut out = String::new();

    out.push_str(&format!(
        "{}\t\t\t{}\n",
        TableKey::C1.as_str(),
        TableKey::C2.as_str()
    ));
    out.push_str(&format!("{}{}{}\n", SUB_HEADER, COLUMN_GAP, SUB_HEADER));

    let row_count = rows1.len().max(rows2.len());
    for i in 0..row_count {
        let left = rows1.get(i).map(|r| format_cell(r)).unwrap_or_default();
        let right = rows2.get(i).map(|r| format_cell(r)).unwrap_or_default();
        out.push_str(&format!("{}{}{}\n", left, COLUMN_GAP, right));
    }

    out.push('\n');
    out.push_str(LEGEND_LINE);
    out.push('\n');

    for (key, rows) in [(TableKey::C1, &rows1), (TableKey::C2, &rows2)] {
        let joined = rows
            .iter()
            .map(|r| r.number.to_string())
            .collect::<Vec<_>>()
            .join(",");
        out.push_str(&format!(
            "{} {}s in use: {}\n",
            key.as_str(),
            HEADER_MARKER,
            joined
        ));
    }

    out.push_str(TRAILER_LINE);
    out.push('\n');
    out
}

/// `name number idle` with single spaces; a missing name just drops away.
fn format_cell(record: &Record) -> String {
    format!("{} {} {}", record.name, record.number, record.idle)
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::super::read_roster;
    use super::*;

    fn sample() -> Roster {
        Roster {
            c1: vec![Record::new(5, 0, "张三"), Record::new(12, 1, "")],
            c2: vec![Record::new(0, 0, "李四")],
        }
    }

    #[test]
    fn test_round_trip_through_the_reader() {
        let roster = sample();
        let text = write_roster(&roster);
        assert_eq!(read_roster(&text), roster);
    }

    #[test]
    fn test_round_trip_empty_roster() {
        let roster = Roster::default();
        let text = write_roster(&roster);
        assert_eq!(read_roster(&text), roster);
    }

    #[test]
    fn test_round_trip_right_heavy_roster() {
        // More C2 rows than C1 rows forces left-empty lines, which must come
        // back as C2-only records.
        let roster = Roster {
            c1: vec![Record::new(7, 0, "")],
            c2: vec![
                Record::new(1, 0, "张三"),
                Record::new(2, 1, ""),
                Record::new(3, 2, "李四"),
            ],
        };
        let text = write_roster(&roster);
        assert_eq!(read_roster(&text), roster);
    }

    #[test]
    fn test_cells_trim_missing_names() {
        let text = write_roster(&sample());
        let row: Vec<&str> = text.lines().collect();
        assert_eq!(row[2], "张三 5 0\t\t李四 0 0");
        assert_eq!(row[3], "12 1\t\t");
    }

    #[test]
    fn test_summary_lines_join_numbers() {
        let text = write_roster(&sample());
        assert!(text.contains("C1 numbers in use: 5,12\n"));
        assert!(text.contains("C2 numbers in use: 0\n"));
    }

    #[test]
    fn test_empty_table_summary_is_blank() {
        let text = write_roster(&Roster::default());
        assert!(text.contains("C1 numbers in use: \n"));
        assert!(text.contains("C2 numbers in use: \n"));
    }

    #[test]
    fn test_writer_sorts_unsorted_input() {
        let roster = Roster {
            c1: vec![Record::new(12, 1, ""), Record::new(5, 0, "张三")],
            c2: vec![],
        };
        let text = write_roster(&roster);
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows[2], "张三 5 0\t\t");
        assert_eq!(rows[3], "12 1\t\t");
    }
}
