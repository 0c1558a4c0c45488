pub mod config;

mod client;
mod display;
mod models;
mod poller;
mod renderer;

use std::sync::Arc;

use anyhow::Context;
use log::{error, info, warn};
use tokio::sync::Mutex;

use crate::client::SensorClient;
use crate::config::AppConfig;
use crate::display::DisplaySlots;

pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    info!("Starting sensor display");

    match main_loop(config).await {
        Ok(_) => info!("Application completed successfully"),
        Err(e) => {
            error!("Application error: {e:#}");
            // Print chain of error causes
            let mut source = e.source();
            while let Some(e) = source {
                error!("Caused by: {e}");
                source = e.source();
            }
            return Err(e).context("Application failed to run");
        }
    }

    Ok(())
}

async fn main_loop(config: AppConfig) -> anyhow::Result<()> {
    let client = SensorClient::new(&config.server.endpoint);
    let slots = Arc::new(Mutex::new(DisplaySlots::default()));

    if config.poller.interval == 0 {
        warn!("Poll interval of 0s is not usable, running with 1s");
    }

    let mut interval = tokio::time::interval(config.poll_interval());
    loop {
        interval.tick().await; // First tick completes immediately

        let client = client.clone();
        let slots = Arc::clone(&slots);

        // No in-flight guard: a slow request may overlap the next tick,
        // and whichever response lands last writes the slots last.
        tokio::spawn(async move {
            poller::refresh(&client, &slots).await;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_run_on_defaults_keeps_polling() {
        // No config file anywhere; the defaults alone must keep the loop
        // alive instead of failing out of run()
        let outcome = tokio::time::timeout(
            Duration::from_millis(200),
            run(AppConfig::default()),
        )
        .await;

        assert!(outcome.is_err(), "run() should still be polling");
    }
}
