use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_i64())
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_string))
}

/// One `/api/sensor` response. Lives for a single fetch-and-render cycle.
///
/// Every field is optional, and a field of the wrong JSON type decodes to
/// `None` instead of failing the whole payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SensorReading {
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub temp_c: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub humidity: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub device: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub rssi: Option<f64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub timestamp: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub timestamp_server: Option<i64>,
}

impl SensorReading {
    /// The server reports `status: "empty"` until the first reading arrives.
    pub fn is_empty(&self) -> bool {
        self.status.as_deref() == Some("empty")
    }
}
