use thiserror::Error;

/// Errors raised while loading the service configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set in environment")]
    Missing(&'static str),

    #[error("{name} has an invalid value {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Errors internal to forwarding. None of these escape `SubmissionForwarder::forward`.
#[derive(Debug, Error)]
pub enum ForwarderError {
    #[error("failed to encode webhook payload: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}
