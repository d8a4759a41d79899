//! Single-threaded change notification channel.
//!
//! Publishers call [`ChangeNotifier::notify`] once per state change; every
//! registered callback runs once per call. Delivery order is unspecified and
//! consumers must not rely on it.
//!
//! Each round delivers to a snapshot of the subscribers taken when the round
//! starts, so a callback may unsubscribe itself (or anyone else) mid-round
//! without changing who hears about the current change.

use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Callback = Rc<dyn Fn()>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: SmallVec<[(u64, Callback); 4]>,
}

#[derive(Default)]
pub struct ChangeNotifier {
    registry: Rc<RefCell<Registry>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback`. Dropping the returned token does not unsubscribe.
    pub fn subscribe(&self, callback: impl Fn() + 'static) -> Subscription {
        let mut reg = self.registry.borrow_mut();
        let id = reg.next_id;
        reg.next_id += 1;
        reg.listeners.push((id, Rc::new(callback)));
        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    pub fn notify(&self) {
        let snapshot: SmallVec<[Callback; 4]> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(_, cb)| Rc::clone(cb))
            .collect();
        for cb in snapshot {
            cb();
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// Deregistration token returned by [`ChangeNotifier::subscribe`].
#[must_use = "keep the subscription to be able to unsubscribe later"]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    /// Remove this callback. Returns `false` if it was already removed or the
    /// notifier is gone.
    pub fn unsubscribe(&self) -> bool {
        let Some(registry) = self.registry.upgrade() else {
            return false;
        };
        let mut reg = registry.borrow_mut();
        let before = reg.listeners.len();
        reg.listeners.retain(|(id, _)| *id != self.id);
        reg.listeners.len() != before
    }
}
