//! # Time Server Core
//!
//! Timezone-aware time resolution for the HTTP server.
//!
//! ## Features
//! - Injectable clock so "now" can be pinned in tests
//! - Local time of one instant across many IANA timezones
//! - Automatic DST handling
//! - Fixed reference zone formatting for the single-zone endpoint
//!
//! ## Modules
//! - `clock`: The `Clock` trait with system and fixed implementations
//! - `error`: Custom error types and their HTTP mapping
//! - `models`: Request and response bodies
//! - `resolver`: Zone lookup and per-zone time conversion
//! - `utils`: Format strings and formatting helpers

pub mod clock;
pub mod error;
pub mod models;
pub mod resolver;
pub mod utils;
