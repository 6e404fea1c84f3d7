//! Listener fixtures.

use beacon_events::Listener;

use crate::recorder::CallLog;

/// A listener that records every payload it receives.
#[must_use]
pub fn recording_listener<D, C>(log: &CallLog<D>) -> Listener<D, C>
where
    D: Clone + 'static,
{
    let log = log.clone();
    Listener::named("recording", move |_, data: &D| log.push(data.clone()))
}

/// A listener that records its tag on every call.
///
/// Useful for asserting dispatch order across several listeners.
#[must_use]
pub fn tagged_listener<D, C>(log: &CallLog<&'static str>, tag: &'static str) -> Listener<D, C> {
    let log = log.clone();
    Listener::named(tag, move |_, _| log.push(tag))
}

/// A listener that records a unit value per call; `log.len()` is the call
/// count.
#[must_use]
pub fn counting_listener<D, C>(log: &CallLog<()>) -> Listener<D, C> {
    let log = log.clone();
    Listener::named("counting", move |_, _| log.push(()))
}

/// A listener that panics with `message` whenever it is called.
#[must_use]
pub fn panicking_listener<D, C>(message: &'static str) -> Listener<D, C> {
    Listener::named("panicking", move |_, _| panic!("{message}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use beacon_events::Event;

    #[test]
    fn test_recording_listener() {
        let log = CallLog::new();
        let evt: Event<String> = Event::new();

        evt.subscribe(&recording_listener(&log));
        evt.fire(&"a".to_string());
        evt.fire(&"b".to_string());

        assert_eq!(log.entries(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_counting_listener() {
        let log = CallLog::new();
        let evt: Event<u8> = Event::new();

        evt.subscribe(&counting_listener(&log));
        evt.fire(&1);
        evt.fire(&2);

        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_panicking_listener() {
        let evt: Event = Event::new();
        evt.subscribe(&panicking_listener("expected"));

        let err = evt.try_fire(&()).unwrap_err();
        assert!(err.to_string().ends_with("panicked: expected"));
    }
}
