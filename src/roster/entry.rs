use super::Record;

/// True for a plain non-negative integer literal, the only numeric form the
/// roster grammar accepts (no sign, no separators).
pub(crate) fn is_integer(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Resolves one record's whitespace-split tokens: `[name] number [idle]`.
///
/// The leading name is present iff the first token is not an integer
/// literal; the idle count defaults to 0 when absent. Tokens past the ones
/// the grammar consumes are ignored. Returns `None` when the tokens match
/// neither shape - the caller drops the line without raising.
pub fn parse_entry(tokens: &[&str]) -> Option<Record> {
    let first = *tokens.first()?;

    // Leading integer: no name on this entry.
    if is_integer(first) {
        let number = first.parse().ok()?;
        return match tokens.get(1) {
            Some(second) if is_integer(second) => {
                Some(Record::new(number, second.parse().ok()?, ""))
            }
            Some(_) => None,
            None => Some(Record::new(number, 0, "")),
        };
    }

    // Leading name: an integer number must follow.
    let second = *tokens.get(1)?;
    if !is_integer(second) {
        return None;
    }
    let number = second.parse().ok()?;
    let idle = match tokens.get(2) {
        Some(third) if is_integer(third) => third.parse().ok()?,
        _ => 0,
    };
    Some(Record::new(number, idle, first))
}
