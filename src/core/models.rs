use serde::{Deserialize, Serialize};

/// Payload carried inside the event's `body` field, itself a JSON string.
#[derive(Debug, Deserialize)]
pub struct RequestBody {
    pub words: String,
}

/// The HTTP-gateway event shape the runtime consumes from `GET /next`.
#[derive(Debug, Clone, Deserialize)]
pub struct InvocationEvent {
    pub body: String,
    #[serde(rename = "requestContext")]
    pub request_context: RequestContext,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RequestContext {
    pub http: HttpContext,
}

/// Caller metadata extracted from the gateway event. Read-only; passed to
/// the handler and echoed back unchanged.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpContext {
    pub source_ip: String,
    pub user_agent: String,
}

/// The handler's output, serialized and posted back to the control plane.
/// `reversed` serializes as `null` when reversal produced no value.
#[derive(Debug, Serialize)]
pub struct ResponseBody {
    pub original: String,
    pub reversed: Option<String>,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub ip_addr: String,
    pub user_agent: String,
}
