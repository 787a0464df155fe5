use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the length budget is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    // Alt-text limits on the web are measured in UTF-16 code units.
    #[default]
    Utf16,
    Chars,
}

impl LengthUnit {
    #[must_use]
    pub fn measure(self, text: &str) -> usize {
        match self {
            Self::Utf16 => text.encode_utf16().count(),
            Self::Chars => text.chars().count(),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Utf16 => "utf16",
            Self::Chars => "chars",
        }
    }
}

impl FromStr for LengthUnit {
    type Err = String;

    fn from_str(raw: &str) -> std::result::Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "utf16" | "utf-16" => Ok(Self::Utf16),
            "chars" | "char" => Ok(Self::Chars),
            other => Err(format!("unknown length unit '{other}' (expected utf16 or chars)")),
        }
    }
}
