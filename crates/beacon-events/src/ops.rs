//! Free-function surface over [`Event`].
//!
//! Each function forwards to the matching method; they exist for callers
//! that prefer `fire_event(&evt, &data)` over `evt.fire(&data)`.

use std::any::Any;

use crate::disposer::Disposer;
use crate::event::Event;
use crate::listener::Listener;

/// Create a channel bound to `context`.
#[must_use]
pub fn event<D: 'static, C: 'static>(context: C) -> Event<D, C> {
    Event::with_context(context)
}

/// Create a channel whose context is `C::default()`.
#[must_use]
pub fn event_default<D: 'static, C: Default + 'static>() -> Event<D, C> {
    Event::new()
}

/// Subscribe `listener` to `evt`. See [`Event::subscribe`].
pub fn subscribe<D: 'static, C: 'static>(
    evt: &Event<D, C>,
    listener: &Listener<D, C>,
) -> Disposer {
    evt.subscribe(listener)
}

/// Remove `listener` from `evt`. See [`Event::unsubscribe`].
pub fn unsubscribe<D: 'static, C: 'static>(evt: &Event<D, C>, listener: &Listener<D, C>) {
    evt.unsubscribe(listener);
}

/// Subscribe `listener` to `evt` for one delivery. See [`Event::once`].
pub fn once<D: 'static, C: 'static>(evt: &Event<D, C>, listener: &Listener<D, C>) -> Disposer {
    evt.once(listener)
}

/// Deliver `data` to every listener of `evt`. See [`Event::fire`].
pub fn fire_event<D: 'static, C: 'static>(evt: &Event<D, C>, data: &D) {
    evt.fire(data);
}

/// Remove every listener from `evt`. See [`Event::clear`].
pub fn clear_event<D: 'static, C: 'static>(evt: &Event<D, C>) {
    evt.clear();
}

/// Whether `evt` has at least one listener.
#[must_use]
pub fn has_listeners<D: 'static, C: 'static>(evt: &Event<D, C>) -> bool {
    evt.has_listeners()
}

/// Whether `value` is an `Event<D, C>`.
///
/// Plain closures, listeners, primitives, `Option`s and every other type
/// answer `false`, as do events whose data or context type differs.
#[must_use]
pub fn is_event<D: 'static, C: 'static>(value: &dyn Any) -> bool {
    value.is::<Event<D, C>>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[test]
    fn test_event_factory() {
        let evt: Event<i32, &str> = event("ctx");
        assert_eq!(*evt.context(), "ctx");
        assert!(!has_listeners(&evt));

        let evt: Event<i32, u8> = event_default();
        assert_eq!(*evt.context(), 0);
    }

    #[test]
    fn test_free_function_round() {
        let received = Rc::new(RefCell::new(Vec::new()));
        let received_clone = Rc::clone(&received);
        let evt: Event<i32> = event(());
        let listener =
            Listener::new(move |(), data: &i32| received_clone.borrow_mut().push(*data));

        let disposer = subscribe(&evt, &listener);
        assert!(has_listeners(&evt));

        fire_event(&evt, &5);
        disposer.dispose();
        fire_event(&evt, &10);

        assert_eq!(*received.borrow(), vec![5]);
        assert!(!has_listeners(&evt));
    }

    #[test]
    fn test_unsubscribe_and_clear() {
        let evt: Event = event(());
        let listener = Listener::new(|(), ()| {});

        unsubscribe(&evt, &listener);
        subscribe(&evt, &listener);
        unsubscribe(&evt, &listener);
        assert!(!has_listeners(&evt));

        subscribe(&evt, &listener);
        clear_event(&evt);
        assert!(!has_listeners(&evt));
        clear_event(&evt);
    }

    #[test]
    fn test_once() {
        let count = Rc::new(RefCell::new(0_u32));
        let count_clone = Rc::clone(&count);
        let evt: Event = event(());

        once(
            &evt,
            &Listener::new(move |(), ()| {
                let mut count = count_clone.borrow_mut();
                *count = count.wrapping_add(1);
            }),
        );
        fire_event(&evt, &());
        fire_event(&evt, &());

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_is_event() {
        let evt: Event = Event::new();
        assert!(is_event::<(), ()>(&evt));

        let typed: Event<String, u8> = Event::new();
        assert!(is_event::<String, u8>(&typed));
        assert!(!is_event::<(), ()>(&typed));
    }

    #[test]
    fn test_is_event_rejects_everything_else() {
        let closure = || {};
        let listener: Listener<()> = Listener::new(|(), ()| {});

        assert!(!is_event::<(), ()>(&true));
        assert!(!is_event::<(), ()>(&1));
        assert!(!is_event::<(), ()>(&"string"));
        assert!(!is_event::<(), ()>(&HashMap::<String, String>::new()));
        assert!(!is_event::<(), ()>(&closure));
        assert!(!is_event::<(), ()>(&listener));
        assert!(!is_event::<(), ()>(&None::<Event>));
        assert!(!is_event::<(), ()>(&()));
    }
}
