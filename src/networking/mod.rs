//! Networking - the connection to the chess server

pub mod client;

pub use client::ChessClient;
