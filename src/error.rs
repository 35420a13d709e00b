use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid log level: {0}")]
    LogLevel(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
