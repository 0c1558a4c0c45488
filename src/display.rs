use chrono::{Local, LocalResult, TimeZone};

use crate::models::SensorReading;

pub(crate) const PLACEHOLDER: &str = "—";

/// The five output slots of the display panel.
///
/// Invariant: every slot always holds either a formatted value or its
/// placeholder form; a slot is never blank.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySlots {
    pub temp: String,
    pub humidity: String,
    pub device: String,
    pub rssi: String,
    pub updated: String,
}

impl Default for DisplaySlots {
    fn default() -> Self {
        Self {
            temp: format!("{PLACEHOLDER} °C"),
            humidity: format!("{PLACEHOLDER} %"),
            device: PLACEHOLDER.to_string(),
            rssi: format!("RSSI: {PLACEHOLDER} dBm"),
            updated: PLACEHOLDER.to_string(),
        }
    }
}

impl DisplaySlots {
    /// Overwrite all five slots from one reading. Fields that are missing
    /// fall back to their placeholder form; the rest still update.
    pub fn apply(&mut self, reading: &SensorReading) {
        if reading.is_empty() {
            let empty = Self::default();
            self.temp = empty.temp;
            self.humidity = empty.humidity;
            self.device = empty.device;
            self.rssi = empty.rssi;
            self.updated = format_timestamp(reading.timestamp_server);
            return;
        }

        self.temp = match reading.temp_c {
            Some(t) => format!("{t:.1} °C"),
            None => format!("{PLACEHOLDER} °C"),
        };

        self.humidity = match reading.humidity {
            Some(h) => format!("{h} %"),
            None => format!("{PLACEHOLDER} %"),
        };

        self.device = match reading.device.as_deref() {
            Some(d) if !d.is_empty() => d.to_string(),
            _ => PLACEHOLDER.to_string(),
        };

        self.rssi = match reading.rssi {
            Some(r) => format!("RSSI: {r} dBm"),
            None => format!("RSSI: {PLACEHOLDER} dBm"),
        };

        // A zero capture timestamp means the device clock was not set yet,
        // so the server receipt time stands in for it.
        let ts = reading
            .timestamp
            .filter(|&t| t != 0)
            .or(reading.timestamp_server);
        self.updated = format_timestamp(ts);
    }
}

/// Render an epoch-seconds value as local date and time, or the placeholder
/// for zero, negative, or absent values.
pub(crate) fn format_timestamp(epoch: Option<i64>) -> String {
    let Some(epoch) = epoch else {
        return PLACEHOLDER.to_string();
    };
    if epoch <= 0 {
        return PLACEHOLDER.to_string();
    }

    match Local.timestamp_opt(epoch, 0) {
        LocalResult::Single(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}
