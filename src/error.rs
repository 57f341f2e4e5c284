use thiserror::Error;

#[derive(Error, Debug)]
pub enum SongrateError {
    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid rating assignment '{0}': expected <dimension>=<value>")]
    InvalidAssignment(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SongrateError>;
