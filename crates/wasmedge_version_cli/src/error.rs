use crate::trace::TracingError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    YamlError(#[from] serde_yaml::Error),

    #[error(transparent)]
    TracingError(#[from] TracingError),
}

pub type CliResult<T> = Result<T, CliError>;
