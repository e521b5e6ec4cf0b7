/// Observable holder for the current presentation mode.
///
/// Listeners are notified synchronously, in registration order, from inside
/// `set`. The listener list is snapshotted before a notification pass, and a
/// listener removed during the pass is skipped for the rest of it.

use super::types::Mode;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Listener = Rc<dyn Fn(Mode)>;

struct Inner {
    mode: Cell<Mode>,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(u64, Listener)>>,
}

impl Inner {
    fn is_registered(&self, id: u64) -> bool {
        self.listeners.borrow().iter().any(|(lid, _)| *lid == id)
    }

    fn remove(&self, id: u64) {
        self.listeners.borrow_mut().retain(|(lid, _)| *lid != id);
    }
}

#[derive(Clone)]
pub struct ModeStore {
    inner: Rc<Inner>,
}

impl ModeStore {
    pub fn new() -> Self {
        Self::with_mode(Mode::Entry)
    }

    pub fn with_mode(mode: Mode) -> Self {
        Self {
            inner: Rc::new(Inner {
                mode: Cell::new(mode),
                next_id: Cell::new(0),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn get(&self) -> Mode {
        self.inner.mode.get()
    }

    pub fn set(&self, mode: Mode) {
        let previous = self.inner.mode.replace(mode);
        log::debug!("mode {} -> {}", previous.label(), mode.label());

        // No borrow may be held while a listener runs: listeners are free to
        // subscribe, unsubscribe or call `set` again.
        let snapshot: Vec<(u64, Listener)> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(id, f)| (*id, Rc::clone(f)))
            .collect();

        for (id, listener) in snapshot {
            if self.inner.is_registered(id) {
                listener(mode);
            }
        }
    }

    pub fn subscribe(&self, listener: impl Fn(Mode) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        Subscription {
            store: Rc::downgrade(&self.inner),
            id,
        }
    }

    #[cfg(test)]
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Drop every listener. Called when the application shuts down.
    pub fn clear(&self) {
        self.inner.listeners.borrow_mut().clear();
    }
}

impl Default for ModeStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Registration handle returned by [`ModeStore::subscribe`].
///
/// Dropping the handle keeps the listener registered; call `unsubscribe`
/// to remove it.
pub struct Subscription {
    store: Weak<Inner>,
    id: u64,
}

impl Subscription {
    pub fn unsubscribe(&self) {
        if let Some(inner) = self.store.upgrade() {
            inner.remove(self.id);
        }
    }
}
