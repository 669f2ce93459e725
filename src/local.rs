use std::fs;

use anyhow::Context;

use crate::core::models::InvocationEvent;
use crate::handler;

/// Event file consumed when no runtime API is configured.
const EVENT_PATH: &str = "event.json";

/// Single-shot local mode: read one event from `event.json`, run the handler
/// once, print the JSON response to stdout. Failures propagate to the
/// process boundary.
pub fn run_once() -> anyhow::Result<()> {
    let raw = fs::read_to_string(EVENT_PATH)
        .with_context(|| format!("failed to read {EVENT_PATH}"))?;
    let event: InvocationEvent =
        serde_json::from_str(&raw).with_context(|| format!("failed to parse {EVENT_PATH}"))?;

    let response = handler::handle(&event.body, &event.request_context.http)
        .context("handler failed")?;
    println!("{}", serde_json::to_string(&response)?);

    Ok(())
}
