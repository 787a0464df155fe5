// Only positions 1..=5 occur in practice, so 11-13 keep the plain "th" suffix.
#[must_use]
pub fn ordinal(index: usize) -> String {
    match index {
        1 => "1st".to_string(),
        2 => "2nd".to_string(),
        3 => "3rd".to_string(),
        _ => format!("{index}th"),
    }
}

/// "1st", "1st and 3rd", "1st, 3rd and 5th". `None` for an empty list.
#[must_use]
pub fn ordinal_list(indexes: &[usize]) -> Option<String> {
    let (last, head) = indexes.split_last()?;
    if head.is_empty() {
        return Some(ordinal(*last));
    }
    let head = head
        .iter()
        .map(|index| ordinal(*index))
        .collect::<Vec<_>>()
        .join(", ");
    Some(format!("{head} and {}", ordinal(*last)))
}
