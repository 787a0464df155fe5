use thiserror::Error;

pub type Result<T> = std::result::Result<T, WordleAltError>;

#[derive(Debug, Error)]
pub enum WordleAltError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl WordleAltError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::Io(_) => "IO_ERROR",
            Self::Toml(_) => "TOML_ERROR",
            Self::Json(_) => "JSON_ERROR",
        }
    }
}
