//! Live reduced-motion preference
//!
//! The OS accessibility setting can change while the process runs, so it is
//! modelled as a signal with change listeners rather than a value read once.
//! Platform glue pushes changes in with [`ReducedMotionSignal::set`].

use ecosystem_core::{Observers, SubscriptionId};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};

/// Environment override consulted by [`detect_system_reduced_motion`]
pub const REDUCED_MOTION_ENV: &str = "ECOSYSTEM_REDUCED_MOTION";

struct Inner {
    value: AtomicBool,
    observers: Mutex<Observers<bool>>,
}

/// Shared, cloneable reduced-motion flag
///
/// Clones observe the same value. Listeners run synchronously inside
/// [`set`](Self::set) and must not subscribe or unsubscribe from within the
/// callback.
#[derive(Clone)]
pub struct ReducedMotionSignal {
    inner: Arc<Inner>,
}

impl ReducedMotionSignal {
    pub fn new(initial: bool) -> Self {
        Self {
            inner: Arc::new(Inner {
                value: AtomicBool::new(initial),
                observers: Mutex::new(Observers::new()),
            }),
        }
    }

    /// Seed from the environment (see [`detect_system_reduced_motion`])
    pub fn from_system() -> Self {
        Self::new(detect_system_reduced_motion())
    }

    /// Current value
    pub fn get(&self) -> bool {
        self.inner.value.load(Ordering::SeqCst)
    }

    /// Update the value; listeners run only if it actually changed
    pub fn set(&self, value: bool) {
        let previous = self.inner.value.swap(value, Ordering::SeqCst);
        if previous == value {
            return;
        }

        tracing::debug!("ReducedMotionSignal::set - {} -> {}", previous, value);
        self.inner
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .notify(&value);
    }

    /// Listen for changes; the listener stays registered until the guard drops
    #[must_use = "dropping the subscription deregisters the listener"]
    pub fn subscribe<F>(&self, listener: F) -> ReducedMotionSubscription
    where
        F: Fn(&bool) + Send + Sync + 'static,
    {
        let id = self
            .inner
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .subscribe(listener);

        ReducedMotionSubscription {
            signal: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Number of live listeners
    pub fn listener_count(&self) -> usize {
        self.inner
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Default for ReducedMotionSignal {
    fn default() -> Self {
        Self::new(false)
    }
}

impl std::fmt::Debug for ReducedMotionSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReducedMotionSignal")
            .field("value", &self.get())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Registration guard returned by [`ReducedMotionSignal::subscribe`]
pub struct ReducedMotionSubscription {
    signal: Weak<Inner>,
    id: SubscriptionId,
}

impl Drop for ReducedMotionSubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.signal.upgrade() {
            inner
                .observers
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .unsubscribe(self.id);
        }
    }
}

/// Best-effort read of the system reduced-motion preference
///
/// `ECOSYSTEM_REDUCED_MOTION` (`1`/`true`/`reduce`) wins; otherwise GTK's
/// `GTK_ENABLE_ANIMATIONS=0` is honored. Anything else means no preference.
pub fn detect_system_reduced_motion() -> bool {
    if let Ok(value) = std::env::var(REDUCED_MOTION_ENV) {
        return parse_flag(&value);
    }
    matches!(std::env::var("GTK_ENABLE_ANIMATIONS").as_deref(), Ok("0"))
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "reduce"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_listener_sees_changes_only() {
        let signal = ReducedMotionSignal::new(false);
        let calls = Arc::new(AtomicUsize::new(0));

        let c = calls.clone();
        let _sub = signal.subscribe(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });

        signal.set(false);
        signal.set(true);
        signal.set(true);
        signal.set(false);

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(!signal.get());
    }

    #[test]
    fn test_drop_deregisters() {
        let signal = ReducedMotionSignal::new(false);
        for _ in 0..3 {
            let sub = signal.subscribe(|_| {});
            assert_eq!(signal.listener_count(), 1);
            drop(sub);
        }
        assert_eq!(signal.listener_count(), 0);
    }

    #[test]
    fn test_subscription_outliving_signal() {
        let signal = ReducedMotionSignal::new(true);
        let sub = signal.subscribe(|_| {});
        drop(signal);
        drop(sub);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag(" Reduce "));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("no-preference"));
    }
}
