use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Duplicate project id in catalog: {0}")]
    DuplicateProject(String),

    #[error("Animation duration must be positive, got {0}ms")]
    InvalidDuration(f64),

    #[error("Invalid form: {0}")]
    InvalidForm(String),

    #[error("Preference store error: {0}")]
    Preference(String),
}

pub type Result<T> = std::result::Result<T, Error>;
