use repeatmap::core::annotations::domain::DomainLoadError;
use repeatmap::engine::error::EngineError;
use repeatmap::workflows::startup::StartupError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] EngineError),

    #[error(transparent)]
    Startup(#[from] StartupError),

    #[error("Domain table error: {0}")]
    Domains(#[from] DomainLoadError),

    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
