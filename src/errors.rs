use thiserror::Error;

#[derive(Debug, Error)]
pub enum GuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Controller error: {0}")]
    Controller(String),

    #[error("Capture error: {0}")]
    Capture(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialize error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

impl serde::Serialize for GuardError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}

pub type GuardResult<T> = Result<T, GuardError>;
