//! Server configuration
//!
//! Values are layered: built-in defaults, then the JSON settings file, then
//! environment variables (`.env` included) and command-line flags.

use clap::Parser;
use serde::{Deserialize, Serialize};
use shared::protocol::{DEFAULT_HOST, DEFAULT_PORT};
use shared::{settings, GlyphStyle};
use std::path::PathBuf;

/// Settings file name inside the config directory
pub const SETTINGS_FILENAME: &str = "server.json";

#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Two-player networked chess server", long_about = None)]
pub struct ServerArgs {
    /// Address to listen on
    #[arg(long, env = "NETCHESS_HOST")]
    pub host: Option<String>,

    /// TCP port to listen on
    #[arg(short, long, env = "NETCHESS_PORT")]
    pub port: Option<u16>,

    /// Piece glyphs for the boards sent to players (unicode or letters)
    #[arg(long, env = "NETCHESS_GLYPHS")]
    pub glyphs: Option<GlyphStyle>,

    /// Settings file (defaults to server.json in the user config dir)
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
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub glyphs: GlyphStyle,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            glyphs: GlyphStyle::default(),
        }
    }
}

impl ServerConfig {
    /// Settings file overlaid with command-line/environment values
    pub fn load(args: &ServerArgs) -> Self {
        settings::load_or_default::<Self>(&Self::settings_file(args)).with_overrides(args)
    }

    /// `--config` if given, otherwise the file in the user config dir
    pub fn settings_file(args: &ServerArgs) -> PathBuf {
        args.config
            .clone()
            .unwrap_or_else(|| settings::settings_path(SETTINGS_FILENAME))
    }

    pub fn with_overrides(mut self, args: &ServerArgs) -> Self {
        if let Some(host) = &args.host {
            self.host = host.clone();
        }
        if let Some(port) = args.port {
            self.port = port;
        }
        if let Some(glyphs) = args.glyphs {
            self.glyphs = glyphs;
        }
        self
    }

    /// `host:port` for binding
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
