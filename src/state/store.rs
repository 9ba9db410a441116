//! Observable two-state store.
//!
//! A [`Store`] holds one value that can only ever be flipped to its sole
//! alternate through [`Store::toggle`]. Handles are cheap clones of the same
//! shared cell, so every component that receives one observes the same value.
//!
//! Delivery is synchronous: when `toggle()` returns, every listener that was
//! subscribed at the time has been called exactly once with the new value, in
//! subscription order. A `toggle()` issued from inside a listener is queued and
//! delivered after the current round, still before the outer call returns.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

/// A value with exactly two states.
pub trait Toggle: Copy + fmt::Debug + PartialEq + 'static {
    /// The single alternate value.
    fn toggled(self) -> Self;
}

impl Toggle for bool {
    fn toggled(self) -> Self {
        !self
    }
}

type Listener<S> = Rc<dyn Fn(S)>;

struct Slot<S> {
    id: u64,
    listener: Listener<S>,
    active: Rc<Cell<bool>>,
}

struct Inner<S> {
    name: &'static str,
    value: Cell<S>,
    listeners: RefCell<Vec<Slot<S>>>,
    next_id: Cell<u64>,
    delivering: Cell<bool>,
    queued: Cell<usize>,
}

impl<S> Inner<S> {
    fn remove(&self, id: u64) {
        self.listeners.borrow_mut().retain(|slot| slot.id != id);
    }
}

/// Resets the delivery flag even if a listener panics.
struct DeliveryGuard<'a>(&'a Cell<bool>);

impl Drop for DeliveryGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Shared, observable two-state cell.
pub struct Store<S: Toggle> {
    inner: Rc<Inner<S>>,
}

impl<S: Toggle> Clone for Store<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: Toggle> fmt::Debug for Store<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("name", &self.inner.name)
            .field("value", &self.inner.value.get())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl<S: Toggle> Store<S> {
    /// Create a store with its initial value. `name` is used in log lines.
    pub fn new(name: &'static str, initial: S) -> Self {
        Self {
            inner: Rc::new(Inner {
                name,
                value: Cell::new(initial),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(1),
                delivering: Cell::new(false),
                queued: Cell::new(0),
            }),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.inner.name
    }

    /// Current value.
    #[must_use]
    pub fn get(&self) -> S {
        self.inner.value.get()
    }

    /// Flip the value and notify every subscriber before returning.
    pub fn toggle(&self) {
        let inner = &self.inner;
        if inner.delivering.get() {
            // Re-entrant call from a listener: finish the current round first.
            inner.queued.set(inner.queued.get() + 1);
            return;
        }

        inner.delivering.set(true);
        let _guard = DeliveryGuard(&inner.delivering);

        let mut pending = 1usize;
        while pending > 0 {
            pending -= 1;
            let next = inner.value.get().toggled();
            inner.value.set(next);
            log::debug!("store '{}' toggled to {:?}", inner.name, next);
            self.deliver(next);
            pending += inner.queued.replace(0);
        }
    }

    /// Register a listener called with the new value after every toggle.
    #[must_use = "dropping the Subscription keeps the listener registered with no way to remove it"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(S) + 'static,
    {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);

        let active = Rc::new(Cell::new(true));
        self.inner.listeners.borrow_mut().push(Slot {
            id,
            listener: Rc::new(listener),
            active: Rc::clone(&active),
        });

        let weak: Weak<Inner<S>> = Rc::downgrade(&self.inner);
        Subscription {
            store: self.inner.name,
            active,
            detach: RefCell::new(Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.remove(id);
                }
            }))),
        }
    }

    /// Number of live listeners.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    fn deliver(&self, value: S) {
        // Snapshot so listeners may subscribe or unsubscribe while we iterate.
        let snapshot: Vec<(Listener<S>, Rc<Cell<bool>>)> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|slot| (Rc::clone(&slot.listener), Rc::clone(&slot.active)))
            .collect();

        for (listener, active) in snapshot {
            if active.get() {
                listener(value);
            }
        }
    }
}

/// Handle returned by [`Store::subscribe`].
pub struct Subscription {
    store: &'static str,
    active: Rc<Cell<bool>>,
    detach: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl Subscription {
    /// Remove the listener. Calling this more than once does nothing.
    pub fn unsubscribe(&self) {
        self.active.set(false);
        if let Some(detach) = self.detach.borrow_mut().take() {
            log::debug!("listener removed from store '{}'", self.store);
            detach();
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("store", &self.store)
            .field("active", &self.active.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_toggle_is_delivered_after_current_round() {
        let store = Store::new("nested", false);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let first_store = store.clone();
        let first_seen = Rc::clone(&seen);
        let _first = store.subscribe(move |value| {
            first_seen.borrow_mut().push(("first", value));
            if value {
                // Flip back once from inside the listener.
                first_store.toggle();
            }
        });

        let second_seen = Rc::clone(&seen);
        let _second = store.subscribe(move |value| second_seen.borrow_mut().push(("second", value)));

        store.toggle();

        assert_eq!(
            *seen.borrow(),
            vec![("first", true), ("second", true), ("first", false), ("second", false)]
        );
        assert!(!store.get());
    }

    #[test]
    fn test_listener_removed_mid_round_is_skipped() {
        let store = Store::new("mid_round", false);
        let calls = Rc::new(Cell::new(0));

        let late: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let late_handle = Rc::clone(&late);
        let _remover = store.subscribe(move |_| {
            if let Some(sub) = late_handle.borrow().as_ref() {
                sub.unsubscribe();
            }
        });

        let late_calls = Rc::clone(&calls);
        *late.borrow_mut() = Some(store.subscribe(move |_| late_calls.set(late_calls.get() + 1)));

        store.toggle();
        assert_eq!(calls.get(), 0);
        assert_eq!(store.subscriber_count(), 1);
    }

    #[test]
    fn test_unsubscribe_after_store_dropped() {
        let store = Store::new("dropped", true);
        let sub = store.subscribe(|_| {});
        drop(store);

        sub.unsubscribe();
        assert!(!sub.is_active());
    }
}
