//! Movie-server - round-robin video clip server
//!
//! This library crate exposes the HTTP layer and configuration for
//! integration testing.

pub mod config;
pub mod server;
