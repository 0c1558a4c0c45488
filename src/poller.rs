use std::io;

use log::{debug, error};
use tokio::sync::Mutex;

use crate::client::SensorClient;
use crate::display::DisplaySlots;
use crate::renderer;

/// One fetch-and-render cycle. Failures are logged and swallowed; the slots
/// keep their previous state until the next tick.
pub(crate) async fn refresh(client: &SensorClient, slots: &Mutex<DisplaySlots>) {
    let reading = match client.fetch().await {
        Ok(reading) => reading,
        Err(e) => {
            error!("fetch sensor failed: {e}");
            return;
        }
    };
    debug!("{reading:?}");

    let mut slots = slots.lock().await;
    slots.apply(&reading);

    if let Err(e) = renderer::draw(&mut io::stdout(), &slots) {
        error!("failed to write display: {e}");
    }
}
