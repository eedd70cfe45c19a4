//! Window storage behind a swappable interface.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Instant;

/// One counted window for one identity.
#[derive(Debug, Clone, Copy)]
pub struct Window {
    pub count: u32,
    pub reset_at: Instant,
}

/// Storage interface for rate-limit windows.
///
/// Implementations only need a key-value map with a sweep; the counting
/// logic stays in the limiter so a shared external store could be slotted
/// in without changing call sites.
pub trait WindowStore: Send + Sync {
    fn get(&self, identity: &str) -> Option<Window>;
    fn set(&self, identity: &str, window: Window);
    /// Remove windows whose reset time is at or before `now`.
    fn sweep(&self, now: Instant);
}

/// In-process map store. Two racing checks for one identity may each read
/// the same count; that slack is acceptable for advisory limiting.
#[derive(Debug, Default)]
pub struct MemoryStore {
    windows: Mutex<HashMap<String, Window>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live windows, for tests and diagnostics.
    pub fn len(&self) -> usize {
        self.windows.lock().expect("window store poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl WindowStore for MemoryStore {
    fn get(&self, identity: &str) -> Option<Window> {
        self.windows
            .lock()
            .expect("window store poisoned")
            .get(identity)
            .copied()
    }

    fn set(&self, identity: &str, window: Window) {
        self.windows
            .lock()
            .expect("window store poisoned")
            .insert(identity.to_string(), window);
    }

    fn sweep(&self, now: Instant) {
        self.windows
            .lock()
            .expect("window store poisoned")
            .retain(|_, w| w.reset_at > now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn sweep_drops_only_expired_windows() {
        let store = MemoryStore::new();
        let now = Instant::now();
        store.set(
            "expired",
            Window {
                count: 3,
                reset_at: now,
            },
        );
        store.set(
            "live",
            Window {
                count: 1,
                reset_at: now + Duration::from_secs(60),
            },
        );

        store.sweep(now);
        assert!(store.get("expired").is_none());
        assert!(store.get("live").is_some());
        assert_eq!(store.len(), 1);
    }
}
