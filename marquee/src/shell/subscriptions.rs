use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Host events the shell reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiEvent {
    /// A pointer-down anywhere on the page.
    PointerDown {
        /// Whether the press landed inside the open dropdown.
        over_dropdown: bool,
    },
    /// The host finished loading fonts.
    FontsReady,
}

type Handler = Box<dyn FnMut(&UiEvent)>;

#[derive(Default)]
struct BusInner {
    handlers: Vec<(u64, Handler)>,
    next_id: u64,
}

/// Single-threaded event dispatch with explicit, scoped subscriptions.
///
/// This replaces ambient global listeners: every consumer holds a
/// [`Subscription`] guard acquired on mount and released (dropped) on
/// unmount. Handlers run in FIFO subscription order.
///
/// Dispatch is not re-entrant: a handler must not emit or subscribe from
/// inside its own callback.
#[derive(Clone, Default)]
pub struct EventBus {
    inner: Rc<RefCell<BusInner>>,
}

impl EventBus {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler. The returned guard unsubscribes on drop.
    #[must_use = "dropping the subscription immediately unsubscribes the handler"]
    pub fn subscribe(&self, handler: impl FnMut(&UiEvent) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.handlers.push((id, Box::new(handler)));
        Subscription {
            bus: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Deliver `event` to every live handler, in subscription order.
    pub fn emit(&self, event: &UiEvent) {
        for (_, handler) in self.inner.borrow_mut().handlers.iter_mut() {
            handler(event);
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().handlers.len()
    }
}

/// RAII guard for one bus subscription; dropping it unsubscribes.
pub struct Subscription {
    bus: Weak<RefCell<BusInner>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(bus) = self.bus.upgrade() {
            bus.borrow_mut().handlers.retain(|(id, _)| *id != self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shell/subscriptions.rs"]
mod tests;
