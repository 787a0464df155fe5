#[must_use]
pub(super) fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[must_use]
pub(super) fn parse_usize_min(raw: Option<String>, min_value: usize) -> Option<usize> {
    non_empty(raw)
        .and_then(|raw| raw.parse::<usize>().ok())
        .filter(|value| *value >= min_value)
}

#[must_use]
pub(super) fn parse_u8(raw: Option<String>) -> Option<u8> {
    non_empty(raw).and_then(|raw| raw.parse::<u8>().ok())
}
