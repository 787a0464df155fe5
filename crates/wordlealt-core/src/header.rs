use std::sync::LazyLock;

use regex::Regex;

use crate::models::HeaderInfo;

static DAY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)wordle\s+[0-9]+").expect("valid day regex"));

static SCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[1-6Xx]/6\*?").expect("valid score regex"));

#[must_use]
pub fn extract_header(first_line: &str) -> HeaderInfo {
    HeaderInfo {
        day: first_match(&DAY_RE, first_line),
        score: first_match(&SCORE_RE, first_line),
    }
}

fn first_match(pattern: &Regex, text: &str) -> String {
    pattern
        .find(text)
        .map(|found| found.as_str().to_string())
        .unwrap_or_default()
}
