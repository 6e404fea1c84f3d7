//! Beacon Test - Shared test utilities for Beacon.
//!
//! This crate provides recorders, listener fixtures and harness helpers
//! that can be used across Beacon crates as a dev-dependency.
//!
//! # Usage
//!
//! ```rust
//! use beacon_events::Event;
//! use beacon_test::{CallLog, tagged_listener};
//!
//! let log = CallLog::new();
//! let evt: Event = Event::new();
//!
//! evt.subscribe(&tagged_listener(&log, "first"));
//! evt.subscribe(&tagged_listener(&log, "second"));
//! evt.trigger();
//!
//! assert_eq!(log.entries(), vec!["first", "second"]);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]

pub mod prelude;

pub mod fixtures;
pub mod harness;
pub mod recorder;

pub use fixtures::*;
pub use harness::*;
pub use recorder::*;
