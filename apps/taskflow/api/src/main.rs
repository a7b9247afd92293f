use axum_helpers::server::create_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use taskflow_api::{Config, app};
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Before any fallible operation so startup errors get colored reports
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    info!(
        "Starting {} v{} ({:?})",
        config.app.name, config.app.version, config.environment
    );

    create_app(app(config.app), &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("TaskFlow API shutdown complete");
    Ok(())
}
