use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordleAltError};
use crate::text::LengthUnit;

mod env;

pub const MAX_LENGTH_ENV: &str = "WORDLEALT_MAX_LENGTH";
pub const MAX_AGGRESSION_ENV: &str = "WORDLEALT_MAX_AGGRESSION";
pub const LENGTH_UNIT_ENV: &str = "WORDLEALT_LENGTH_UNIT";

pub const DEFAULT_MAX_LENGTH: usize = 1000;
pub const DEFAULT_MAX_AGGRESSION: u8 = 21;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AltTextConfig {
    /// Budget for the assembled description, narrative lines included.
    pub max_length: usize,
    /// Highest aggression level the compressor may reach.
    pub max_aggression: u8,
    pub length_unit: LengthUnit,
}

impl Default for AltTextConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            max_aggression: DEFAULT_MAX_AGGRESSION,
            length_unit: LengthUnit::default(),
        }
    }
}

impl AltTextConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config = toml::from_str::<Self>(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides()
    }

    /// Defaults, then the optional TOML file, then `WORDLEALT_*` variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        base.with_env_overrides()
    }

    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides_from(|name| std::env::var(name).ok())
    }

    /// Malformed numbers are ignored; an unknown length unit is rejected.
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(max_length) = env::parse_usize_min(lookup(MAX_LENGTH_ENV), 1) {
            self.max_length = max_length;
        }
        if let Some(max_aggression) = env::parse_u8(lookup(MAX_AGGRESSION_ENV)) {
            self.max_aggression = max_aggression;
        }
        if let Some(raw) = env::non_empty(lookup(LENGTH_UNIT_ENV)) {
            self.length_unit = raw.parse::<LengthUnit>().map_err(|message| {
                WordleAltError::InvalidConfig(format!("{LENGTH_UNIT_ENV}: {message}"))
            })?;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_length == 0 {
            return Err(WordleAltError::InvalidConfig(
                "max_length must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let values = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect::<HashMap<_, _>>();
        move |name: &str| values.get(name).cloned()
    }

    #[test]
    fn defaults_match_alt_text_budget() {
        let config = AltTextConfig::default();
        assert_eq!(config.max_length, 1000);
        assert_eq!(config.max_aggression, 21);
        assert_eq!(config.length_unit, LengthUnit::Utf16);
    }

    #[test]
    fn toml_fields_are_optional_and_override_defaults() {
        let config = AltTextConfig::from_toml_str("max_length = 280\nlength_unit = \"chars\"\n")
            .expect("config");
        assert_eq!(config.max_length, 280);
        assert_eq!(config.max_aggression, DEFAULT_MAX_AGGRESSION);
        assert_eq!(config.length_unit, LengthUnit::Chars);
    }

    #[test]
    fn toml_rejects_unknown_fields_and_zero_budget() {
        let err = AltTextConfig::from_toml_str("max_len = 5").expect_err("unknown field");
        assert_eq!(err.code(), "TOML_ERROR");
        let err = AltTextConfig::from_toml_str("max_length = 0").expect_err("zero budget");
        assert_eq!(err.code(), "INVALID_CONFIG");
    }

    #[test]
    fn overrides_apply_valid_values_and_skip_malformed_numbers() {
        let config = AltTextConfig::default()
            .with_overrides_from(lookup_from(&[
                (MAX_LENGTH_ENV, " 420 "),
                (MAX_AGGRESSION_ENV, "not-a-number"),
                (LENGTH_UNIT_ENV, "chars"),
            ]))
            .expect("overrides");
        assert_eq!(config.max_length, 420);
        assert_eq!(config.max_aggression, DEFAULT_MAX_AGGRESSION);
        assert_eq!(config.length_unit, LengthUnit::Chars);
    }

    #[test]
    fn zero_length_override_is_ignored() {
        let config = AltTextConfig::default()
            .with_overrides_from(lookup_from(&[(MAX_LENGTH_ENV, "0")]))
            .expect("overrides");
        assert_eq!(config.max_length, DEFAULT_MAX_LENGTH);
    }

    #[test]
    fn unknown_length_unit_override_is_a_config_error() {
        let err = AltTextConfig::default()
            .with_overrides_from(lookup_from(&[(LENGTH_UNIT_ENV, "bytes")]))
            .expect_err("unknown unit");
        assert_eq!(err.code(), "INVALID_CONFIG");
        assert!(err.to_string().contains(LENGTH_UNIT_ENV));
    }

    #[test]
    fn from_file_reads_toml_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("wordlealt.toml");
        fs::write(&path, "max_aggression = 4\n").expect("write config");
        let config = AltTextConfig::from_file(&path).expect("config");
        assert_eq!(config.max_aggression, 4);

        let missing = AltTextConfig::from_file(&dir.path().join("missing.toml"))
            .expect_err("missing file");
        assert_eq!(missing.code(), "IO_ERROR");
    }
}
