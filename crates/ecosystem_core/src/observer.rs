//! Keyed listener registry
//!
//! Stores and the theme engine publish changes through an `Observers<T>`
//! rather than a module-level global. Each subscription gets a stable
//! [`SubscriptionId`] so the owner can deregister it on teardown.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle returned by [`Observers::subscribe`]
    pub struct SubscriptionId;
}

/// Listener function type
pub type Listener<T> = Box<dyn Fn(&T) + Send + Sync>;

/// A set of listeners notified in subscription order
pub struct Observers<T> {
    listeners: SlotMap<SubscriptionId, Listener<T>>,
}

impl<T> Observers<T> {
    pub fn new() -> Self {
        Self {
            listeners: SlotMap::with_key(),
        }
    }

    /// Register a listener
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.listeners.insert(Box::new(listener))
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(id).is_some()
    }

    /// Call every listener with `value`
    pub fn notify(&self, value: &T) {
        for (_, listener) in self.listeners.iter() {
            listener(value);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Drop every listener
    pub fn clear(&mut self) {
        self.listeners.clear();
    }
}

impl<T> Default for Observers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Observers<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_notify_reaches_all_listeners() {
        let mut observers = Observers::<i32>::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let a = seen.clone();
        observers.subscribe(move |v| a.lock().unwrap().push(("a", *v)));
        let b = seen.clone();
        observers.subscribe(move |v| b.lock().unwrap().push(("b", *v)));

        observers.notify(&7);

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert!(seen.contains(&("a", 7)));
        assert!(seen.contains(&("b", 7)));
    }

    #[test]
    fn test_unsubscribe() {
        let mut observers = Observers::<()>::new();
        let count = Arc::new(Mutex::new(0));

        let c = count.clone();
        let id = observers.subscribe(move |_| *c.lock().unwrap() += 1);
        observers.notify(&());
        assert!(observers.unsubscribe(id));
        assert!(!observers.unsubscribe(id));
        observers.notify(&());

        assert_eq!(*count.lock().unwrap(), 1);
        assert!(observers.is_empty());
    }
}
