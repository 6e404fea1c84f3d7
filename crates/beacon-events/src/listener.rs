//! Listener handles and listener identity.

use std::fmt;
use std::rc::Rc;
use uuid::Uuid;

/// Name reported for listeners created without one.
const ANONYMOUS: &str = "anonymous";

/// Stable identity of a [`Listener`].
///
/// Every listener gets a fresh id when it is created. Clones of a listener
/// share the id, which is what makes subscribing the same listener twice a
/// no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(Uuid);

impl ListenerId {
    /// Create a new, unique listener ID.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

type Callback<D, C> = dyn Fn(&C, &D);

/// A callback registered on an [`Event`](crate::Event).
///
/// The callback receives the channel's context first and the fired data
/// second, mirroring a method call on the context. A `Listener` is a cheap
/// handle: cloning it yields the *same* listener (same [`ListenerId`]),
/// while wrapping the same closure twice with [`Listener::new`] yields two
/// distinct listeners.
pub struct Listener<D, C = ()> {
    id: ListenerId,
    name: Option<Rc<str>>,
    callback: Rc<Callback<D, C>>,
}

impl<D, C> Listener<D, C> {
    /// Wrap a callback in a new listener.
    #[must_use]
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&C, &D) + 'static,
    {
        Self::from_parts(ListenerId::new(), None, Rc::new(callback))
    }

    /// Wrap a callback in a new listener with a name used in tracing output
    /// and error reports.
    #[must_use]
    pub fn named<F>(name: impl Into<String>, callback: F) -> Self
    where
        F: Fn(&C, &D) + 'static,
    {
        let name: String = name.into();
        Self::from_parts(ListenerId::new(), Some(Rc::from(name)), Rc::new(callback))
    }

    pub(crate) fn from_parts(
        id: ListenerId,
        name: Option<Rc<str>>,
        callback: Rc<Callback<D, C>>,
    ) -> Self {
        Self { id, name, callback }
    }

    /// The listener's identity.
    #[must_use]
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// The listener's debug name, or `"anonymous"`.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(ANONYMOUS)
    }

    pub(crate) fn name_rc(&self) -> Option<Rc<str>> {
        self.name.clone()
    }

    /// Invoke the callback directly, outside of any channel.
    pub fn call(&self, context: &C, data: &D) {
        (self.callback)(context, data);
    }
}

impl<D, C> Clone for Listener<D, C> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            callback: Rc::clone(&self.callback),
        }
    }
}

impl<D, C> PartialEq for Listener<D, C> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<D, C> Eq for Listener<D, C> {}

impl<D, C> fmt::Debug for Listener<D, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("id", &self.id)
            .field("name", &self.name())
            .finish_non_exhaustive()
    }
}
