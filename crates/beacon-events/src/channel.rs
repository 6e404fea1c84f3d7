//! Type-erased channel capability.

use crate::event::Event;

/// Operations every [`Event`] supports regardless of its data and context
/// types.
///
/// Lets code hold channels of different types side by side, e.g. a
/// component that clears all of its channels on teardown.
pub trait Channel {
    /// Whether at least one listener is subscribed.
    fn has_listeners(&self) -> bool;

    /// Number of subscribed listeners.
    fn listener_count(&self) -> usize;

    /// Remove every listener.
    fn clear(&self);
}

impl<D: 'static, C: 'static> Channel for Event<D, C> {
    fn has_listeners(&self) -> bool {
        Event::has_listeners(self)
    }

    fn listener_count(&self) -> usize {
        Event::listener_count(self)
    }

    fn clear(&self) {
        Event::clear(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heterogeneous_channels() {
        let resized: Event<(u32, u32)> = Event::new();
        let renamed: Event<String, &str> = Event::with_context("panel");
        let closed: Event = Event::new();

        resized.on(|(), _| {});
        renamed.on(|_, _| {});
        renamed.on(|_, _| {});

        let channels: Vec<&dyn Channel> = vec![&resized, &renamed, &closed];
        let total: usize = channels.iter().map(|c| c.listener_count()).sum();
        assert_eq!(total, 3);
        assert!(!channels[2].has_listeners());

        for channel in &channels {
            channel.clear();
        }
        assert!(channels.iter().all(|c| !c.has_listeners()));
    }
}
