use std::collections::BTreeSet;
use std::io;

use anyhow::Result;
use tracing::info;

use crate::collect::{collect_numbers, parse_edit_entry, parse_number_list};
use crate::config::PitboardConfig;
use crate::error::PitboardError;
use crate::roster::{delete_numbers, reconcile, upsert, TableDelta, TableKey};
use crate::store::{load_roster, save_roster};

/// Season rollover command: reported numbers reset to fresh, unreported
/// numbers age by one season and drop out at the expiry threshold.
pub fn season_command(config: &PitboardConfig, c1: Option<String>, c2: Option<String>) -> Result<()> {
    run_bulk_update(config, c1, c2, true)
}

/// Mid-season transfer command: reported numbers reset to fresh, everyone
/// else keeps their current idle count.
pub fn transfer_command(
    config: &PitboardConfig,
    c1: Option<String>,
    c2: Option<String>,
) -> Result<()> {
    run_bulk_update(config, c1, c2, false)
}

fn run_bulk_update(
    config: &PitboardConfig,
    c1: Option<String>,
    c2: Option<String>,
    increment_absent: bool,
) -> Result<()> {
    let path = &config.roster.file;
    info!("📋 Loading roster: {:?}", path);
    let mut roster = load_roster(path)?;

    let expiry = config.policy.expiry_threshold;
    let mut deltas = Vec::new();
    for (key, inline) in [(TableKey::C1, c1), (TableKey::C2, c2)] {
        let observed = observed_numbers(key, inline)?;
        info!("🏎️ {} observed numbers for {}", observed.len(), key);

        let before = roster.table(key).to_vec();
        let after = reconcile(&before, &observed, expiry, increment_absent);
        deltas.push((key, TableDelta::between(&before, &after, &observed)));
        *roster.table_mut(key) = after;
    }

    let backup = save_roster(path, &roster, config.roster.keep_backup)?;

    println!("🏁 Roster update complete!");
    for (key, delta) in &deltas {
        println!("   {}: {}", key, delta.summary());
    }
    println!("   Written to: {:?}", path);
    if let Some(backup) = backup {
        println!("   Backup: {:?}", backup);
    }

    Ok(())
}

/// Numbers for one table: the inline argument when given, interactive stdin
/// collection otherwise.
fn observed_numbers(key: TableKey, inline: Option<String>) -> Result<BTreeSet<u32>> {
    let numbers = match inline {
        Some(raw) => {
            let (numbers, skipped) = parse_number_list(&raw);
            for token in skipped {
                println!("  ⚠️ skipping non-numeric entry: {}", token);
            }
            numbers
        }
        None => {
            let stdin = io::stdin();
            collect_numbers(stdin.lock(), key)?
        }
    };
    Ok(numbers.into_iter().collect())
}

/// Single add/modify command. The entry string uses the same grammar as the
/// roster file: `[name] number [idle]`.
pub fn set_command(config: &PitboardConfig, table: &str, entry: &[String]) -> Result<()> {
    let key = parse_table_key(table)?;
    let raw = entry.join(" ");
    let record = parse_edit_entry(&raw).ok_or_else(|| {
        PitboardError::invalid_input(format!(
            "could not parse entry {:?}; expected: [name] number [idle]",
            raw
        ))
    })?;

    let path = &config.roster.file;
    info!("📋 Loading roster: {:?}", path);
    let mut roster = load_roster(path)?;

    let expiry = config.policy.expiry_threshold;
    let existed = roster.table(key).iter().any(|r| r.number == record.number);
    let updated = upsert(
        roster.table(key),
        record.number,
        record.idle,
        &record.name,
        expiry,
    );
    *roster.table_mut(key) = updated;

    let backup = save_roster(path, &roster, config.roster.keep_backup)?;

    if record.idle >= expiry {
        println!(
            "🏁 Number {} removed from {} (idle count {} is at the expiry threshold).",
            record.number, key, record.idle
        );
    } else if existed {
        println!("🏁 Number {} updated in {}.", record.number, key);
    } else {
        println!("🏁 Number {} added to {}.", record.number, key);
    }
    println!("   Written to: {:?}", path);
    if let Some(backup) = backup {
        println!("   Backup: {:?}", backup);
    }

    Ok(())
}

/// Delete command. Numbers may be comma or whitespace separated; an empty
/// valid set cancels the whole operation without touching the file.
pub fn remove_command(config: &PitboardConfig, table: &str, numbers: &[String]) -> Result<()> {
    let key = parse_table_key(table)?;
    let (numbers, skipped) = parse_number_list(&numbers.join(" "));
    for token in &skipped {
        println!("  ⚠️ skipping non-numeric entry: {}", token);
    }
    if numbers.is_empty() {
        println!("⚠️ No valid numbers given, nothing removed.");
        return Ok(());
    }

    let path = &config.roster.file;
    info!("📋 Loading roster: {:?}", path);
    let mut roster = load_roster(path)?;

    let targets: BTreeSet<u32> = numbers.into_iter().collect();
    let (kept, removed) = delete_numbers(roster.table(key), &targets);
    *roster.table_mut(key) = kept;

    let backup = save_roster(path, &roster, config.roster.keep_backup)?;

    if removed > 0 {
        println!("✅ Removed {} record(s) from {}.", removed, key);
    } else {
        println!("⚠️ None of the requested numbers were present in {}.", key);
    }
    println!("   Written to: {:?}", path);
    if let Some(backup) = backup {
        println!("   Backup: {:?}", backup);
    }

    Ok(())
}

/// Rewrite-only command: load and re-serialize, normalizing a legacy layout
/// to the canonical one without changing any record.
pub fn rewrite_command(config: &PitboardConfig) -> Result<()> {
    let path = &config.roster.file;
    info!("📋 Loading roster: {:?}", path);
    let roster = load_roster(path)?;

    let backup = save_roster(path, &roster, config.roster.keep_backup)?;

    println!("✅ Roster rewritten: {:?}", path);
    println!(
        "   {}: {} record(s) | {}: {} record(s)",
        TableKey::C1,
        roster.c1.len(),
        TableKey::C2,
        roster.c2.len()
    );
    if let Some(backup) = backup {
        println!("   Backup: {:?}", backup);
    }

    Ok(())
}

fn parse_table_key(raw: &str) -> Result<TableKey> {
    TableKey::parse(raw).ok_or_else(|| {
        PitboardError::invalid_input(format!("invalid table {:?}; use 1, 2, C1 or C2", raw)).into()
    })
}
