use reqwest::header::CONTENT_TYPE;
use reqwest::Client as HttpClient;

use crate::core::models::{InvocationEvent, ResponseBody};
use crate::errors::RuntimeError;

/// Response header carrying the invocation identifier.
const REQUEST_ID_HEADER: &str = "Lambda-Runtime-Aws-Request-Id";

/// One unit of work pulled from the control plane.
#[derive(Debug)]
pub struct Invocation {
    pub request_id: String,
    pub event: InvocationEvent,
}

/// HTTP client for the Lambda Runtime API invocation endpoints.
pub struct RuntimeClient {
    http: HttpClient,
    base_url: String,
}

impl RuntimeClient {
    /// `base_url` is the invocation prefix, e.g.
    /// `http://127.0.0.1:9001/2018-06-01/runtime/invocation`.
    pub fn new(base_url: String) -> Result<Self, RuntimeError> {
        // No idle pooling: each poll/post round trip gets a fresh connection.
        let http = HttpClient::builder().pool_max_idle_per_host(0).build()?;
        Ok(Self { http, base_url })
    }

    /// Block on `GET {base}/next` until the control plane hands out an
    /// invocation. The invocation id comes from a response header; the event
    /// is the JSON response body.
    pub async fn next_invocation(&self) -> Result<Invocation, RuntimeError> {
        let resp = self
            .http
            .get(format!("{}/next", self.base_url))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let request_id = resp
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
            .ok_or(RuntimeError::MissingRequestId)?;

        let event = resp.json::<InvocationEvent>().await?;

        Ok(Invocation { request_id, event })
    }

    /// `POST {base}/{id}/response` with the serialized handler output. A
    /// non-2xx status is reported as `Rejected`; the caller decides that it
    /// is non-fatal.
    pub async fn post_response(
        &self,
        request_id: &str,
        response: &ResponseBody,
    ) -> Result<(), RuntimeError> {
        let resp = self
            .http
            .post(format!("{}/{}/response", self.base_url, request_id))
            .json(response)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(RuntimeError::Rejected(status));
        }

        Ok(())
    }
}
