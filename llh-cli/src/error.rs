use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("invalid {name} '{value}': expected a number")]
    InvalidArgument { name: &'static str, value: String },

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
