use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template rendering failed: {0}")]
    Template(#[from] askama::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Could not resolve date: {0}")]
    InvalidDate(String),

    #[error("Feed {feed} failed: {message}")]
    Feed { feed: String, message: String },
}

pub type Result<T> = std::result::Result<T, FixtureError>;
