use thiserror::Error;

use gordon_core::{FetchError, FetchErrorKind};

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid input: {0}")]
    Invalid(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("command error: {0}")]
    Command(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Invalid(_) => 2,
            Self::Fetch(error) => match error.kind() {
                FetchErrorKind::Configuration => 3,
                FetchErrorKind::IncompleteData => 4,
                FetchErrorKind::MalformedRequest
                | FetchErrorKind::Upstream
                | FetchErrorKind::MalformedResponse
                | FetchErrorKind::Unknown => 6,
            },
            Self::Command(_) | Self::Serialization(_) | Self::Io(_) => 10,
        }
    }
}
