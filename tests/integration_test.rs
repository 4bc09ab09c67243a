use std::collections::BTreeSet;
use std::fs;

use tempfile::tempdir;

use pitboard::roster::{delete_numbers, reconcile, Record, Roster, TableKey};
use pitboard::store::{backup_path, load_roster, save_roster};

const EXPIRY: u32 = 3;

#[test]
fn test_season_update_end_to_end() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("roster.txt");

    // 1. Start from a legacy sequential-block file.
    fs::write(&path, "C1\n张三 5 0\n12 2\nC2\n李四 0 1\n").unwrap();

    let mut roster = load_roster(&path).unwrap();
    assert_eq!(
        roster.c1,
        vec![Record::new(5, 0, "张三"), Record::new(12, 2, "")]
    );
    assert_eq!(roster.c2, vec![Record::new(0, 1, "李四")]);

    // 2. Season rollover: 5 and the new 33 reported for C1, nothing for C2.
    let observed_c1: BTreeSet<u32> = [5, 33].into_iter().collect();
    let observed_c2: BTreeSet<u32> = BTreeSet::new();
    roster.c1 = reconcile(&roster.c1, &observed_c1, EXPIRY, true);
    roster.c2 = reconcile(&roster.c2, &observed_c2, EXPIRY, true);

    // 12 had idle 2 and was unreported, so it aged out; 0 just aged.
    assert_eq!(
        roster.c1,
        vec![Record::new(5, 0, "张三"), Record::new(33, 0, "")]
    );
    assert_eq!(roster.c2, vec![Record::new(0, 2, "李四")]);

    // 3. Persisting keeps the previous version as a backup.
    let backup = save_roster(&path, &roster, true).unwrap().unwrap();
    assert_eq!(backup, backup_path(&path));
    assert_eq!(
        fs::read_to_string(&backup).unwrap(),
        "C1\n张三 5 0\n12 2\nC2\n李四 0 1\n"
    );

    // 4. The rewritten file is canonical and loads back identically.
    let reloaded = load_roster(&path).unwrap();
    assert_eq!(reloaded, roster);
}

#[test]
fn test_rewrite_normalizes_legacy_layout() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("roster.txt");

    // Unordered sequential input with a stray header line.
    fs::write(&path, "C1\nnumber idle\n42\n5 1\nC2\n7 0\n").unwrap();

    let roster = load_roster(&path).unwrap();
    save_roster(&path, &roster, false).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "C1\t\t\tC2");
    assert_eq!(lines[2], "5 1\t\t7 0");
    assert_eq!(lines[3], "42 0\t\t");
    assert!(text.contains("C1 numbers in use: 5,42\n"));
    assert!(text.contains("C2 numbers in use: 7\n"));

    // A second load sees the exact same roster.
    assert_eq!(load_roster(&path).unwrap(), roster);
}

#[test]
fn test_remove_flow_reports_actual_removals() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("roster.txt");

    let roster = Roster {
        c1: vec![Record::new(5, 0, "张三"), Record::new(9, 1, "")],
        c2: vec![],
    };
    save_roster(&path, &roster, false).unwrap();

    let mut loaded = load_roster(&path).unwrap();
    let targets: BTreeSet<u32> = [9, 999].into_iter().collect();
    let (kept, removed) = delete_numbers(loaded.table(TableKey::C1), &targets);
    *loaded.table_mut(TableKey::C1) = kept;

    assert_eq!(removed, 1);
    save_roster(&path, &loaded, false).unwrap();

    let final_roster = load_roster(&path).unwrap();
    assert_eq!(final_roster.c1, vec![Record::new(5, 0, "张三")]);
}
