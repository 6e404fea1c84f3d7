//! Beacon Telemetry - Logging setup for Beacon.
//!
//! This crate provides:
//! - Configurable `tracing` subscriber setup with multiple formats
//! - Log configuration loaded from TOML files and environment overrides
//!
//! # Example
//!
//! ```rust,no_run
//! use beacon_telemetry::{LogConfig, LogFormat, setup_logging};
//!
//! # fn main() -> Result<(), beacon_telemetry::TelemetryError> {
//! let config = LogConfig::new("info")
//!     .with_format(LogFormat::Pretty)
//!     .with_directive("beacon_events=trace")
//!     .apply_env()?;
//!
//! setup_logging(&config)?;
//! tracing::info!("Logging ready");
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

mod config;
mod error;
mod logging;

pub use config::{LOG_ENV, LOG_FORMAT_ENV};
pub use error::{TelemetryError, TelemetryResult};
pub use logging::{LogConfig, LogFormat, LogTarget, setup_default_logging, setup_logging};
