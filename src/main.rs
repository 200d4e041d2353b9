use anyhow::Context;
use clap::Parser;
use netchess::{ChessClient, ClientArgs, ClientConfig};
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = ClientArgs::parse();

    // Logs go to stderr so they never interleave with the board on stdout
    let default_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::load(&args);
    if args.save_config {
        let path = ClientConfig::settings_file(&args);
        shared::settings::save(&path, &config)
            .with_context(|| format!("could not write settings to {}", path.display()))?;
        info!("[SETTINGS] Saved settings to {:?}", path);
        return Ok(());
    }
    let mut client = ChessClient::connect(&config)
        .await
        .context("ERROR: server not found")?;

    let mut keyboard = BufReader::new(tokio::io::stdin());
    let mut screen = std::io::stdout();
    client
        .run(&mut keyboard, &mut screen)
        .await
        .context("ERROR: game interrupted")?;
    Ok(())
}
