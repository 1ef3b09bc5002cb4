//! CLI error types

use playground_sandbox::{ParseError, SandboxError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Sandbox error: {0}")]
    Sandbox(#[from] SandboxError),

    #[error("{0}")]
    Message(String),
}

impl From<ParseError> for CliError {
    fn from(e: ParseError) -> Self {
        Self::Sandbox(SandboxError::Parse(e))
    }
}

pub type CliResult<T> = Result<T, CliError>;
