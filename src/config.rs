use anyhow::{Context, Result};
use config::{Config, File};
use log::{debug, LevelFilter};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub endpoint: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PollerConfig {
    pub interval: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(rename = "SERVER", default)]
    pub server: ServerConfig,
    #[serde(rename = "POLLER", default)]
    pub poller: PollerConfig,
    #[serde(rename = "LOGGING", default)]
    pub logging: LoggingConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost/api/sensor".to_string(),
        }
    }
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self { interval: 5 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            poller: PollerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        Self::from_file("config.ini")
    }

    pub fn get_log_level(&self) -> LevelFilter {
        match self.logging.level.to_lowercase().as_str() {
            "trace" => LevelFilter::Trace,
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            "off" => LevelFilter::Off,
            _ => LevelFilter::Info, // Default to Info if invalid
        }
    }

    /// Poll period, clamped to at least one second. tokio's interval
    /// rejects a zero period.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poller.interval.max(1))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config_path = path.as_ref();
        debug!("Loading configuration from {}", config_path.display());

        let config = Config::builder()
            .add_source(File::from(config_path).format(config::FileFormat::Ini))
            .build()
            .context(format!(
                "Failed to load config from {}",
                config_path.display()
            ))?;

        let app_config: AppConfig = config
            .try_deserialize()
            .context("Failed to deserialize config")?;

        Ok(app_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.endpoint, "http://localhost/api/sensor");
        assert_eq!(config.poller.interval, 5);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let config_content = "[SERVER]\nendpoint = \"http://192.168.4.1/api/sensor\"\n\n[POLLER]\ninterval = 10\n\n[LOGGING]\nlevel = \"debug\"\n";

        temp_file.write_all(config_content.as_bytes()).unwrap();
        let config_path = temp_file.path();

        let config = AppConfig::from_file(config_path).unwrap();

        assert_eq!(config.server.endpoint, "http://192.168.4.1/api/sensor");
        assert_eq!(config.poller.interval, 10);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let config_content = "[POLLER]\ninterval = 2\n";

        temp_file.write_all(config_content.as_bytes()).unwrap();
        let config_path = temp_file.path();

        let config = AppConfig::from_file(config_path).unwrap();

        assert_eq!(config.server.endpoint, "http://localhost/api/sensor");
        assert_eq!(config.poller.interval, 2);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let config_content = "[POLLER]\ninterval = 0\n";

        temp_file.write_all(config_content.as_bytes()).unwrap();
        let config = AppConfig::from_file(temp_file.path()).unwrap();

        assert_eq!(config.poller.interval, 0);
        assert_eq!(config.poll_interval(), Duration::from_secs(1));

        assert_eq!(
            AppConfig::default().poll_interval(),
            Duration::from_secs(5)
        );
    }

    #[test]
    fn test_log_level_mapping() {
        let mut config = AppConfig::default();
        assert_eq!(config.get_log_level(), LevelFilter::Info);

        config.logging.level = "Debug".to_string();
        assert_eq!(config.get_log_level(), LevelFilter::Debug);

        config.logging.level = "nonsense".to_string();
        assert_eq!(config.get_log_level(), LevelFilter::Info);
    }
}
