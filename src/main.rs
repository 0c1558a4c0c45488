use env_logger::{Builder, WriteStyle};
use log::error;
use grow_display::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Config is read before the logger exists, so complain on stderr and
    // run on defaults if config.ini is missing or broken.
    let config = AppConfig::new().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        AppConfig::default()
    });

    Builder::new()
        .filter_level(config.get_log_level())
        .write_style(WriteStyle::Always)
        .format_timestamp_secs()
        .init();

    if let Err(e) = grow_display::run(config).await {
        error!("Application error: {}", e);
        return Err(e);
    }
    Ok(())
}
