use anyhow::Context;
use backend::{ServerArgs, ServerConfig};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = ServerArgs::parse();

    let default_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = ServerConfig::load(&args);
    if args.save_config {
        let path = ServerConfig::settings_file(&args);
        shared::settings::save(&path, &config)
            .with_context(|| format!("could not write settings to {}", path.display()))?;
        info!("[SETTINGS] Saved settings to {:?}", path);
        return Ok(());
    }
    info!("[SERVER] Starting chess server on {}", config.address());

    tokio::select! {
        result = backend::run(&config) => {
            let status = result.context("chess server stopped")?;
            info!("[SERVER] Final result: {}", status.message());
        }
        _ = tokio::signal::ctrl_c() => {
            info!("[SERVER] Interrupted, closing server...");
        }
    }
    Ok(())
}
