//! Window-level event subscriptions.
//!
//! # Invariants
//! - A `Subscription` detaches its handler when dropped.
//! - Handlers run without the listener lock held, so a handler may drop
//!   its own subscription.

use std::sync::{Arc, Mutex, PoisonError, Weak};

type ClickHandler = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    handlers: Vec<(u64, ClickHandler)>,
}

/// Process-wide click bus, cloned into every view that needs it.
#[derive(Clone, Default)]
pub struct WindowEvents {
    listeners: Arc<Mutex<Listeners>>,
}

impl WindowEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a click handler for as long as the returned guard lives.
    #[must_use = "dropping the subscription detaches the handler"]
    pub fn on_click(&self, handler: impl Fn() + Send + Sync + 'static) -> Subscription {
        let mut listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.handlers.push((id, Arc::new(handler)));
        Subscription {
            id,
            listeners: Arc::downgrade(&self.listeners),
        }
    }

    /// Delivers one click anywhere in the window.
    pub fn dispatch_click(&self) {
        let handlers: Vec<ClickHandler> = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .handlers
            .iter()
            .map(|(_, handler)| Arc::clone(handler))
            .collect();
        for handler in handlers {
            handler();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .handlers
            .len()
    }
}

/// Guard keeping one window handler attached.
pub struct Subscription {
    id: u64,
    listeners: Weak<Mutex<Listeners>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .handlers
                .retain(|(id, _)| *id != self.id);
        }
    }
}
