//! Logging utilities.
//!
//! This module centralizes logger initialization. Everything else logs through
//! the standard `log` facade; the backend is `env_logger` natively and the
//! browser console on wasm32.

mod init;

pub use init::{LoggingConfig, init_logging};
