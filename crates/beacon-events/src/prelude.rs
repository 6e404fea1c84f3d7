//! Prelude module - commonly used types for convenient import.
//!
//! Use `use beacon_events::prelude::*;` to import all essential types.
//!
//! # Example
//!
//! ```rust
//! use beacon_events::prelude::*;
//!
//! let closed: Event = Event::new();
//! let guard = closed.on(|(), ()| println!("closed")).into_guard();
//!
//! closed.trigger();
//! drop(guard);
//! assert!(!closed.has_listeners());
//! ```

// Channel
pub use crate::{Channel, Event};

// Listeners and subscriptions
pub use crate::{Disposer, Listener, ListenerId, SubscriptionGuard};

// Errors
pub use crate::{EventError, EventResult};
