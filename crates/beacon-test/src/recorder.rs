//! Call recording for listener assertions.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A shared, single-threaded log of values.
///
/// Clones append to the same log, so one clone can move into a listener
/// while the test keeps another for assertions.
pub struct CallLog<T> {
    entries: Rc<RefCell<Vec<T>>>,
}

impl<T> CallLog<T> {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Append a value.
    pub fn push(&self, value: T) {
        self.entries.borrow_mut().push(value);
    }

    /// Number of recorded values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

impl<T: Clone> CallLog<T> {
    /// Copy of everything recorded, in order.
    #[must_use]
    pub fn entries(&self) -> Vec<T> {
        self.entries.borrow().clone()
    }

    /// The most recent value.
    #[must_use]
    pub fn last(&self) -> Option<T> {
        self.entries.borrow().last().cloned()
    }

    /// Return everything recorded and reset the log.
    #[must_use]
    pub fn take(&self) -> Vec<T> {
        std::mem::take(&mut *self.entries.borrow_mut())
    }
}

impl<T> Clone for CallLog<T> {
    fn clone(&self) -> Self {
        Self {
            entries: Rc::clone(&self.entries),
        }
    }
}

impl<T> Default for CallLog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for CallLog<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CallLog").field(&self.entries.borrow()).finish()
    }
}
