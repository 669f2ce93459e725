/// reverse-words - A custom Lambda runtime for a string-reversal function.
///
/// This crate implements the Lambda Runtime API client loop directly instead
/// of depending on a runtime library:
/// 1. A poller that fetches the next invocation from the runtime control
///    plane, invokes the handler, and posts the result back
/// 2. A pure handler that reverses the `words` field of the request body and
///    echoes the caller's IP and user agent
///
/// # Architecture
///
/// The system uses:
/// - Tokio for the async runtime and shutdown signalling
/// - reqwest for the control-plane HTTP round trips
/// - serde/serde_json for the event and response wire shapes
///
/// When `AWS_LAMBDA_RUNTIME_API` is not set, the binary instead reads a
/// single event from `./event.json`, runs the handler once, and prints the
/// response to stdout.
// Module declarations
pub mod core;
pub mod errors;
pub mod handler;
pub mod local;
pub mod runtime;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Sets up tracing-subscriber with a JSON formatter suitable for `CloudWatch`
/// Logs integration. Call once at process start.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
