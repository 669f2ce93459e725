use crate::core::models::{HttpContext, RequestBody, ResponseBody, ResponseMeta};
use crate::errors::RuntimeError;

/// Handler for one invocation. Parses the event body, reverses its `words`
/// field, and echoes the caller metadata byte-for-byte. A malformed body is
/// an error for the caller to log; a failed reversal is not, it just leaves
/// `reversed` empty.
pub fn handle(body: &str, ctx: &HttpContext) -> Result<ResponseBody, RuntimeError> {
    let request: RequestBody = serde_json::from_str(body)?;

    Ok(ResponseBody {
        reversed: reverse_words(&request.words),
        original: request.words,
        meta: ResponseMeta {
            ip_addr: ctx.source_ip.clone(),
            user_agent: ctx.user_agent.clone(),
        },
    })
}

/// Reverse the scalar-value sequence of `words`.
///
/// This is deliberately not grapheme-cluster-aware: a combining mark ends up
/// in front of its base character, matching the observed behavior of the
/// deployed function. `None` models a reversal that produced no value;
/// scalar-value reversal itself cannot fail, so today this always returns
/// `Some`.
pub fn reverse_words(words: &str) -> Option<String> {
    Some(words.chars().rev().collect())
}
