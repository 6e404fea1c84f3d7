//! The event channel: an ordered, de-duplicated listener set bound to a
//! fixed context.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::rc::{Rc, Weak};
use tracing::{debug, trace, warn};

use crate::disposer::{Detach, Disposer};
use crate::error::{EventError, EventResult, panic_message};
use crate::listener::{Listener, ListenerId};

/// One subscription. `live` flips to `false` the moment the listener is
/// removed, which is how an in-flight dispatch learns to skip it.
struct Entry<D, C> {
    listener: Listener<D, C>,
    live: Cell<bool>,
}

/// State shared by every clone of an [`Event`].
struct Shared<D, C> {
    /// `None` until the first subscription.
    listeners: RefCell<Option<Vec<Rc<Entry<D, C>>>>>,
    context: C,
}

impl<D, C> Shared<D, C> {
    fn insert(&self, listener: &Listener<D, C>) -> bool {
        let mut slot = self.listeners.borrow_mut();
        let entries = slot.get_or_insert_with(Vec::new);

        if entries.iter().any(|e| e.listener.id() == listener.id()) {
            return false;
        }

        entries.push(Rc::new(Entry {
            listener: listener.clone(),
            live: Cell::new(true),
        }));
        true
    }

    fn remove(&self, id: ListenerId) -> bool {
        // The borrow ends before the entry is dropped: a listener's captures
        // may touch this channel from their own `Drop`.
        let removed = {
            let mut slot = self.listeners.borrow_mut();
            let Some(entries) = slot.as_mut() else {
                return false;
            };
            let Some(pos) = entries.iter().position(|e| e.listener.id() == id) else {
                return false;
            };
            entries.remove(pos)
        };

        removed.live.set(false);
        true
    }

    fn clear(&self) -> usize {
        let drained = match self.listeners.borrow_mut().as_mut() {
            Some(entries) => std::mem::take(entries),
            None => return 0,
        };

        for entry in &drained {
            entry.live.set(false);
        }
        drained.len()
    }

    fn len(&self) -> usize {
        self.listeners.borrow().as_ref().map_or(0, Vec::len)
    }

    fn contains(&self, id: ListenerId) -> bool {
        self.listeners
            .borrow()
            .as_ref()
            .is_some_and(|entries| entries.iter().any(|e| e.listener.id() == id))
    }

    fn snapshot(&self) -> Vec<Rc<Entry<D, C>>> {
        self.listeners.borrow().clone().unwrap_or_default()
    }
}

impl<D, C> Detach for Shared<D, C> {
    fn detach(&self, id: ListenerId) -> bool {
        self.remove(id)
    }
}

/// A single publish point.
///
/// `Event<D, C>` delivers data of type `D` to its listeners, each of which
/// also receives a shared reference to the channel's context `C`. The
/// context is fixed at construction. Cloning an `Event` yields another
/// handle to the same channel.
///
/// # Dispatch
///
/// [`fire`](Self::fire) walks the listeners present when it starts, in
/// subscription order. A listener removed before its turn is skipped; a
/// listener added during the pass waits for the next one. No internal
/// borrow is held while a listener runs, so listeners may freely
/// subscribe, unsubscribe, clear or fire re-entrantly.
///
/// # Example
///
/// ```rust
/// use beacon_events::Event;
///
/// let clicked: Event<u32> = Event::new();
/// let disposer = clicked.on(|(), count| println!("clicked {count} times"));
///
/// clicked.fire(&1);
/// disposer.dispose();
/// assert!(!clicked.has_listeners());
/// ```
pub struct Event<D = (), C = ()> {
    shared: Rc<Shared<D, C>>,
}

impl<D: 'static, C: Default + 'static> Event<D, C> {
    /// Create a channel whose context is `C::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_context(C::default())
    }
}

impl<D: 'static, C: Default + 'static> Default for Event<D, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: 'static, C: 'static> Event<D, C> {
    /// Create a channel bound to the given context.
    #[must_use]
    pub fn with_context(context: C) -> Self {
        Self {
            shared: Rc::new(Shared {
                listeners: RefCell::new(None),
                context,
            }),
        }
    }

    /// The context passed to every listener.
    #[must_use]
    pub fn context(&self) -> &C {
        &self.shared.context
    }

    /// Subscribe a listener.
    ///
    /// Subscribing a listener that is already present changes nothing; the
    /// returned disposer still removes it.
    pub fn subscribe(&self, listener: &Listener<D, C>) -> Disposer {
        if self.shared.insert(listener) {
            trace!(
                listener = %listener.name(),
                listener_id = %listener.id(),
                listener_count = self.shared.len(),
                "Listener subscribed"
            );
        }

        self.disposer_for(listener.id())
    }

    /// Subscribe a closure as a new listener.
    pub fn on<F>(&self, callback: F) -> Disposer
    where
        F: Fn(&C, &D) + 'static,
    {
        self.subscribe(&Listener::new(callback))
    }

    /// Remove a listener. Does nothing if it is not subscribed.
    pub fn unsubscribe(&self, listener: &Listener<D, C>) {
        self.unsubscribe_id(listener.id());
    }

    /// Remove a listener by id. Does nothing if it is not subscribed.
    pub fn unsubscribe_id(&self, id: ListenerId) {
        if self.shared.remove(id) {
            trace!(listener_id = %id, "Listener unsubscribed");
        }
    }

    /// Subscribe a listener for a single delivery.
    ///
    /// The subscription removes itself before the listener runs, so the
    /// listener sees at most one delivery even if it fires this channel
    /// again. The disposer cancels the subscription if it has not fired.
    pub fn once(&self, listener: &Listener<D, C>) -> Disposer {
        let id = ListenerId::new();
        let channel = Rc::downgrade(&self.shared);
        let inner = listener.clone();

        let wrapper = Listener::from_parts(
            id,
            listener.name_rc(),
            Rc::new(move |context: &C, data: &D| {
                if let Some(shared) = channel.upgrade() {
                    shared.remove(id);
                }
                inner.call(context, data);
            }),
        );

        self.subscribe(&wrapper)
    }

    /// Subscribe a closure for a single delivery. See [`once`](Self::once).
    pub fn on_once<F>(&self, callback: F) -> Disposer
    where
        F: Fn(&C, &D) + 'static,
    {
        self.once(&Listener::new(callback))
    }

    /// Deliver `data` to every current listener, in subscription order.
    ///
    /// A panicking listener unwinds out of this call and the listeners
    /// after it are not invoked for this pass.
    pub fn fire(&self, data: &D) {
        let entries = self.shared.snapshot();
        trace!(listener_count = entries.len(), "Firing event");

        for entry in &entries {
            if entry.live.get() {
                entry.listener.call(&self.shared.context, data);
            }
        }
    }

    /// Like [`fire`](Self::fire), but a listener panic is returned as
    /// [`EventError::ListenerPanicked`] instead of unwinding.
    ///
    /// Dispatch still stops at the first panic.
    ///
    /// # Errors
    ///
    /// Returns an error if a listener panics.
    pub fn try_fire(&self, data: &D) -> EventResult<()> {
        let entries = self.shared.snapshot();
        trace!(listener_count = entries.len(), "Firing event");

        for entry in &entries {
            if !entry.live.get() {
                continue;
            }

            let listener = &entry.listener;
            let result = panic::catch_unwind(AssertUnwindSafe(|| {
                listener.call(&self.shared.context, data);
            }));

            if let Err(payload) = result {
                let message = panic_message(payload.as_ref());
                warn!(
                    listener = %listener.name(),
                    listener_id = %listener.id(),
                    error = %message,
                    "Listener panicked, dispatch aborted"
                );
                return Err(EventError::ListenerPanicked {
                    listener: listener.name().to_string(),
                    listener_id: listener.id(),
                    message,
                });
            }
        }

        Ok(())
    }

    /// Remove every listener. Disposers handed out earlier become no-ops.
    pub fn clear(&self) {
        let removed = self.shared.clear();
        if removed != 0 {
            debug!(removed, "Event listeners cleared");
        }
    }

    /// Whether at least one listener is subscribed.
    #[must_use]
    pub fn has_listeners(&self) -> bool {
        self.shared.len() != 0
    }

    /// Number of subscribed listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.shared.len()
    }

    /// Whether the given listener is subscribed.
    #[must_use]
    pub fn contains(&self, listener: &Listener<D, C>) -> bool {
        self.shared.contains(listener.id())
    }

    /// Whether two handles refer to the same channel.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.shared, &other.shared)
    }

    fn disposer_for(&self, id: ListenerId) -> Disposer {
        let channel: Weak<Shared<D, C>> = Rc::downgrade(&self.shared);
        Disposer::new(channel, id)
    }
}

impl<C: 'static> Event<(), C> {
    /// Fire a channel that carries no data.
    pub fn trigger(&self) {
        self.fire(&());
    }
}

impl<D, C> Clone for Event<D, C> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<D, C> fmt::Debug for Event<D, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `try_borrow` keeps `{:?}` usable from inside a listener.
        let count = self
            .shared
            .listeners
            .try_borrow()
            .map(|slot| slot.as_ref().map_or(0, Vec::len))
            .ok();
        f.debug_struct("Event")
            .field("listener_count", &count)
            .finish_non_exhaustive()
    }
}
