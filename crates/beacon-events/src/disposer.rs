//! Subscription disposers.

use std::fmt;
use std::rc::Weak;
use tracing::trace;

use crate::listener::ListenerId;

/// Type-erased view of a channel that can drop one listener by id.
pub(crate) trait Detach {
    /// Remove the listener; returns `true` if it was present.
    fn detach(&self, id: ListenerId) -> bool;
}

/// Handle that removes one specific subscription from its channel.
///
/// Returned by [`Event::subscribe`](crate::Event::subscribe) and
/// [`Event::once`](crate::Event::once). Disposing is idempotent: calling
/// [`dispose`](Self::dispose) after the listener is already gone (disposed,
/// unsubscribed, cleared, or the channel dropped) does nothing.
///
/// Dropping a `Disposer` does **not** unsubscribe. Use
/// [`into_guard`](Self::into_guard) for scope-bound subscriptions.
#[derive(Clone)]
pub struct Disposer {
    channel: Weak<dyn Detach>,
    listener: ListenerId,
}

impl Disposer {
    pub(crate) fn new(channel: Weak<dyn Detach>, listener: ListenerId) -> Self {
        Self { channel, listener }
    }

    /// Remove the associated listener from its channel.
    pub fn dispose(&self) {
        let Some(channel) = self.channel.upgrade() else {
            trace!(listener_id = %self.listener, "Channel already dropped, nothing to dispose");
            return;
        };

        if channel.detach(self.listener) {
            trace!(listener_id = %self.listener, "Listener disposed");
        }
    }

    /// Identity of the listener this disposer removes.
    #[must_use]
    pub fn listener_id(&self) -> ListenerId {
        self.listener
    }

    /// Whether the channel this disposer belongs to is still alive.
    #[must_use]
    pub fn is_channel_alive(&self) -> bool {
        self.channel.strong_count() != 0
    }

    /// Convert into a guard that disposes when dropped.
    #[must_use = "dropping the guard immediately unsubscribes the listener"]
    pub fn into_guard(self) -> SubscriptionGuard {
        SubscriptionGuard {
            disposer: self,
            armed: true,
        }
    }
}

impl fmt::Debug for Disposer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Disposer")
            .field("listener_id", &self.listener)
            .field("channel_alive", &self.is_channel_alive())
            .finish()
    }
}

/// RAII subscription: the listener stays subscribed while the guard lives.
#[derive(Debug)]
pub struct SubscriptionGuard {
    disposer: Disposer,
    armed: bool,
}

impl SubscriptionGuard {
    /// Give up scope-bound behaviour and return the plain disposer.
    ///
    /// The listener stays subscribed after this call.
    #[must_use]
    pub fn release(mut self) -> Disposer {
        self.armed = false;
        self.disposer.clone()
    }

    /// Identity of the guarded listener.
    #[must_use]
    pub fn listener_id(&self) -> ListenerId {
        self.disposer.listener_id()
    }
}

impl Drop for SubscriptionGuard {
    fn drop(&mut self) {
        if self.armed {
            self.disposer.dispose();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Event, Listener};

    #[test]
    fn test_guard_disposes_on_drop() {
        let evt: Event = Event::new();

        {
            let _guard = evt.on(|(), ()| {}).into_guard();
            assert!(evt.has_listeners());
        }

        assert!(!evt.has_listeners());
    }

    #[test]
    fn test_guard_release_keeps_subscription() {
        let evt: Event = Event::new();
        let listener = Listener::new(|(), ()| {});

        let guard = evt.subscribe(&listener).into_guard();
        assert_eq!(guard.listener_id(), listener.id());

        let disposer = guard.release();
        assert!(evt.contains(&listener));

        disposer.dispose();
        assert!(!evt.contains(&listener));
    }

    #[test]
    fn test_guard_after_clear() {
        let evt: Event = Event::new();
        let guard = evt.on(|(), ()| {}).into_guard();

        evt.clear();
        drop(guard);

        assert!(!evt.has_listeners());
    }

    #[test]
    fn test_cloned_disposers_share_target() {
        let evt: Event = Event::new();
        let listener = Listener::new(|(), ()| {});
        let disposer = evt.subscribe(&listener);
        let cloned = disposer.clone();

        cloned.dispose();
        disposer.dispose();

        assert_eq!(disposer.listener_id(), listener.id());
        assert!(!evt.has_listeners());
    }

    #[test]
    fn test_debug_output() {
        let evt: Event = Event::new();
        let disposer = evt.on(|(), ()| {});

        let debug = format!("{disposer:?}");
        assert!(debug.contains("channel_alive: true"));
    }
}
