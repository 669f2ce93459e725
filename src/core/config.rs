use std::env;

/// The fixed path prefix of the Lambda Runtime API.
const RUNTIME_API_PREFIX: &str = "2018-06-01/runtime/invocation";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host (and port) of the runtime control plane. Present when running
    /// inside Lambda; absent when invoked locally against `event.json`.
    pub runtime_api: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            runtime_api: env::var("AWS_LAMBDA_RUNTIME_API").ok(),
        }
    }

    /// Base URL for invocation endpoints, e.g.
    /// `http://127.0.0.1:9001/2018-06-01/runtime/invocation`. `None` selects
    /// local-file mode.
    pub fn runtime_base_url(&self) -> Option<String> {
        self.runtime_api
            .as_deref()
            .map(|host| format!("http://{host}/{RUNTIME_API_PREFIX}"))
    }
}
