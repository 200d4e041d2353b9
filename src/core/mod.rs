//! Core module - client configuration and errors
//!
//! - `config` - [`ClientArgs`] (command line) and [`ClientConfig`] (resolved settings)
//! - `error` - [`ClientError`] and the [`ClientResult`] alias

pub mod config;
pub mod error;

pub use config::{ClientArgs, ClientConfig};
pub use error::{ClientError, ClientResult};
