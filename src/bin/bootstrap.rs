// Lambda bootstrap entry point. With AWS_LAMBDA_RUNTIME_API set it runs the
// invocation loop; without it, one event is read from ./event.json and the
// handler output is printed.

use anyhow::Context;
use reverse_words::core::config::AppConfig;
use reverse_words::runtime::{Poller, RuntimeClient};
use reverse_words::{local, setup_logging};
use tokio::sync::watch;
use tracing::warn;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logging();

    let config = AppConfig::from_env();
    match config.runtime_base_url() {
        Some(base_url) => {
            let client = RuntimeClient::new(base_url).context("failed to build HTTP client")?;
            let poller = Poller::new(client);

            let (stop_tx, stop_rx) = watch::channel(false);
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    let _ = stop_tx.send(true);
                } else {
                    warn!("Failed to listen for shutdown signal");
                }
            });

            poller.run(stop_rx).await;
        }
        None => local::run_once()?,
    }

    Ok(())
}
