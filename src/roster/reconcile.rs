use std::collections::{BTreeMap, BTreeSet};

use super::Record;

// Working form for one table: number -> (idle, name). Keyed, so duplicate
// numbers collapse (last read wins), and iteration comes out ascending.
type TableMap = BTreeMap<u32, (u32, String)>;

fn to_map(records: &[Record]) -> TableMap {
    records
        .iter()
        .map(|r| (r.number, (r.idle, r.name.clone())))
        .collect()
}

fn into_records(map: TableMap) -> Vec<Record> {
    map.into_iter()
        .map(|(number, (idle, name))| Record { number, idle, name })
        .collect()
}

/// Applies one season's worth of observations to a table.
///
/// Every observed number resets to idle 0, keeping its name if it was
/// already on file. The treatment of numbers NOT observed is the policy
/// split: with `increment_absent` they age by one and are dropped when the
/// aged count reaches `expiry`; without it they are left exactly as they
/// were (the mid-cycle freeze).
pub fn reconcile(
    existing: &[Record],
    observed: &BTreeSet<u32>,
    expiry: u32,
    increment_absent: bool,
) -> Vec<Record> {
    let mut map = to_map(existing);

    if increment_absent {
        map = map
            .into_iter()
            .filter_map(|(number, (idle, name))| {
                if observed.contains(&number) {
                    return Some((number, (idle, name)));
                }
                let aged = idle + 1;
                if aged >= expiry {
                    None
                } else {
                    Some((number, (aged, name)))
                }
            })
            .collect();
    }

    for &number in observed {
        let name = map.remove(&number).map(|(_, name)| name).unwrap_or_default();
        map.insert(number, (0, name));
    }

    into_records(map)
}

/// Inserts or updates a single record.
///
/// An idle count at or above `expiry` removes the number instead (the
/// delete-through-edit path); otherwise the idle count is replaced and the
/// name is replaced only when the given one is non-empty, so an empty name
/// never clobbers a stored one.
pub fn upsert(existing: &[Record], number: u32, idle: u32, name: &str, expiry: u32) -> Vec<Record> {
    let mut map = to_map(existing);

    if idle >= expiry {
        map.remove(&number);
    } else {
        let name = match map.get(&number) {
            Some((_, stored)) if name.is_empty() => stored.clone(),
            _ => name.to_string(),
        };
        map.insert(number, (idle, name));
    }

    into_records(map)
}

/// Removes every record whose number is in `numbers`. The returned count is
/// the number of records actually removed, not the size of the request.
pub fn delete_numbers(existing: &[Record], numbers: &BTreeSet<u32>) -> (Vec<Record>, usize) {
    let mut kept: Vec<Record> = Vec::with_capacity(existing.len());
    let mut removed = 0;

    for record in existing {
        if numbers.contains(&record.number) {
            removed += 1;
        } else {
            kept.push(record.clone());
        }
    }

    kept.sort_by_key(|r| r.number);
    (kept, removed)
}
