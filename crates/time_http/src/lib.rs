//! HTTP server reporting the current time across IANA timezones.
//!
//! The [`core`] module holds the clock abstraction and the zone resolver;
//! [`server`] wires them into axum routes.

pub mod cli;
pub mod config;
pub mod core;
pub mod server;
pub mod utils;
