use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by the runtime loop. None of these are fatal in loop
/// mode; the poller logs them and moves on to the next invocation.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Failed to reach runtime API: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse invocation payload: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invocation is missing the Lambda-Runtime-Aws-Request-Id header")]
    MissingRequestId,

    #[error("Runtime API rejected the response: HTTP {0}")]
    Rejected(StatusCode),
}
