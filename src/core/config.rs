//! Client configuration

use clap::Parser;
use serde::{Deserialize, Serialize};
use shared::protocol::{DEFAULT_HOST, DEFAULT_PORT};
use shared::settings;
use std::path::PathBuf;

/// Settings file name inside the config directory
pub const SETTINGS_FILENAME: &str = "client.json";

#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Terminal client for two-player networked chess", long_about = None)]
pub struct ClientArgs {
    /// Server host name or address
    #[arg(long, env = "NETCHESS_HOST")]
    pub host: Option<String>,

    /// Server port
    #[arg(short, long, env = "NETCHESS_PORT")]
    pub port: Option<u16>,

    /// Settings file (defaults to client.json in the user config dir)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the effective settings to the settings file and exit
    #[arg(long)]
    pub save_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ClientConfig {
    pub fn load(args: &ClientArgs) -> Self {
        settings::load_or_default::<Self>(&Self::settings_file(args)).with_overrides(args)
    }

    /// `--config` if given, otherwise the file in the user config dir
    pub fn settings_file(args: &ClientArgs) -> PathBuf {
        args.config
            .clone()
            .unwrap_or_else(|| settings::settings_path(SETTINGS_FILENAME))
    }

    pub fn with_overrides(mut self, args: &ClientArgs) -> Self {
        if let Some(host) = &args.host {
            self.host = host.clone();
        }
        if let Some(port) = args.port {
            self.port = port;
        }
        self
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
