// state.rs - Page loading state
//
// One boolean: "page is masked". Starts true, flips to false once.
// Observers subscribe instead of reading a class off the document.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Observer = Box<dyn FnMut(bool)>;

struct Inner {
    masked: bool,
    next_id: u64,
    observers: Vec<(u64, Observer)>,
    /// Set while unmask runs the observers outside the borrow.
    dispatching: bool,
    /// Subscriptions dropped during dispatch, pruned afterwards.
    removed: Vec<u64>,
}

/// Shared handle to the loading state. Clones observe the same value.
#[derive(Clone)]
pub struct LoadingState {
    inner: Rc<RefCell<Inner>>,
}

impl LoadingState {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                masked: true,
                next_id: 0,
                observers: Vec::new(),
                dispatching: false,
                removed: Vec::new(),
            })),
        }
    }

    pub fn is_masked(&self) -> bool {
        self.inner.borrow().masked
    }

    /// Clear the mask. Returns true only for the call that performed the transition.
    pub fn unmask(&self) -> bool {
        // Take observers out so a callback may subscribe or drop subscriptions.
        let mut observers = {
            let mut inner = self.inner.borrow_mut();
            if !inner.masked {
                return false;
            }
            inner.masked = false;
            inner.dispatching = true;
            std::mem::take(&mut inner.observers)
        };

        for (_, f) in observers.iter_mut() {
            f(false);
        }

        let mut inner = self.inner.borrow_mut();
        inner.dispatching = false;
        observers.append(&mut inner.observers);
        let removed = std::mem::take(&mut inner.removed);
        observers.retain(|(id, _)| !removed.contains(id));
        inner.observers = observers;
        true
    }

    /// Register an observer called with the new masked value on transition.
    pub fn subscribe(&self, f: impl FnMut(bool) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.observers.push((id, Box::new(f)));
        Subscription { id, state: Rc::downgrade(&self.inner) }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().observers.len()
    }
}

impl Default for LoadingState {
    fn default() -> Self {
        Self::new()
    }
}

/// Unsubscribes on drop.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    state: Weak<RefCell<Inner>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(inner) = self.state.upgrade() else { return };
        let mut inner = inner.borrow_mut();
        if inner.dispatching {
            inner.removed.push(self.id);
        }
        inner.observers.retain(|(id, _)| *id != self.id);
    }
}
