use std::path::PathBuf;
use tracing::info;

use slotwatch_app::application::config::AppConfig;
use slotwatch_app::bootstrap;
use slotwatch_infrastructure::logging::init_logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = AppConfig::load(config_path.as_deref())?;

    init_logger(config.log_dir())?;

    let app = bootstrap::build(config).await?;

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received");
    app.shutdown().await;

    Ok(())
}
