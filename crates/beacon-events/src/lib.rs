//! Beacon Events - typed event channels for single-threaded code.
//!
//! This crate provides:
//! - [`Event`], a publish point with an ordered, de-duplicated listener set
//!   and a fixed context handed to every listener
//! - [`Listener`] handles with stable identity
//! - [`Disposer`]s that remove one subscription, idempotently
//! - A free-function surface ([`subscribe`], [`fire_event`], ...) over the
//!   same operations
//!
//! # Threading
//!
//! Channels are `Rc`-based and therefore neither `Send` nor `Sync`.
//! Dispatch is synchronous and runs on the caller's stack.
//!
//! # Example
//!
//! ```rust
//! use beacon_events::{Event, Listener};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! struct Counter {
//!     step: u32,
//! }
//!
//! let total = Rc::new(Cell::new(0));
//! let ticked: Event<u32, Counter> = Event::with_context(Counter { step: 10 });
//!
//! let sink = Rc::clone(&total);
//! let listener = Listener::new(move |counter: &Counter, ticks: &u32| {
//!     sink.set(sink.get() + counter.step * ticks);
//! });
//!
//! ticked.subscribe(&listener);
//! ticked.subscribe(&listener); // already present, no-op
//! ticked.fire(&3);
//!
//! assert_eq!(total.get(), 30);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod ops;
pub mod prelude;

mod channel;
mod disposer;
mod error;
mod event;
mod listener;

pub use channel::Channel;
pub use disposer::{Disposer, SubscriptionGuard};
pub use error::{EventError, EventResult};
pub use event::Event;
pub use listener::{Listener, ListenerId};
pub use ops::{
    clear_event, event, event_default, fire_event, has_listeners, is_event, once, subscribe,
    unsubscribe,
};
