use tokio::sync::watch;
use tracing::{error, info};

use crate::errors::RuntimeError;
use crate::handler;
use crate::runtime::client::RuntimeClient;

/// The invocation loop: poll for the next event, run the handler, post the
/// result, repeat. One invocation is processed fully before the next poll
/// begins; there is no parallelism and no state carried across iterations.
pub struct Poller {
    client: RuntimeClient,
}

impl Poller {
    pub fn new(client: RuntimeClient) -> Self {
        Self { client }
    }

    /// Run until `shutdown` fires. Every error is logged and the loop moves
    /// on to the next invocation; there is no backoff and no retry of the
    /// same invocation.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        info!("Polling runtime API for invocations");

        loop {
            tokio::select! {
                _ = shutdown.changed() => {
                    info!("Shutdown signal received, stopping poller");
                    return;
                }
                result = self.poll_once() => match result {
                    Ok(request_id) => info!(request_id = %request_id, "Invocation completed"),
                    Err(RuntimeError::Rejected(status)) => {
                        error!(%status, "Control plane rejected the response");
                    }
                    Err(err) => error!(error = %err, "Invocation failed"),
                },
            }
        }
    }

    async fn poll_once(&self) -> Result<String, RuntimeError> {
        let invocation = self.client.next_invocation().await?;
        let event = &invocation.event;

        let response = handler::handle(&event.body, &event.request_context.http)?;
        self.client
            .post_response(&invocation.request_id, &response)
            .await?;

        Ok(invocation.request_id)
    }
}
