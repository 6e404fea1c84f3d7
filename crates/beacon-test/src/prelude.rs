//! Prelude module - commonly used test helpers for convenient import.

pub use crate::{
    CallLog, counting_listener, panicking_listener, recording_listener, setup_test_logging,
    setup_test_logging_default, tagged_listener, test_file,
};
