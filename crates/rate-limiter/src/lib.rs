//! Fixed-window request rate limiting.
//!
//! Counts requests in discrete, non-overlapping windows per client
//! identity. State lives behind the [`WindowStore`] trait so the in-process
//! [`MemoryStore`] can later be swapped for a shared external store without
//! touching call sites. Per-process only: horizontally scaled deployments do
//! not share limits, which is acceptable for advisory abuse mitigation.

mod identity;
mod store;

pub use identity::client_identity;
pub use store::{MemoryStore, Window, WindowStore};

use std::time::{Duration, Instant};

/// A named rate-limit policy: `max_requests` per `window`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    pub window: Duration,
    pub max_requests: u32,
}

impl Policy {
    pub const fn new(window_ms: u64, max_requests: u32) -> Self {
        Policy {
            window: Duration::from_millis(window_ms),
            max_requests,
        }
    }

    /// AI generation endpoints: tight, short window.
    pub const fn ai_generation() -> Self {
        Policy::new(60_000, 10)
    }

    /// Visitor contact-form submissions: tight, longer window.
    pub const fn contact_form() -> Self {
        Policy::new(600_000, 5)
    }

    /// Photo uploads.
    pub const fn file_upload() -> Self {
        Policy::new(600_000, 20)
    }

    /// Everything else.
    pub const fn general() -> Self {
        Policy::new(900_000, 100)
    }
}

/// Outcome of a single [`RateLimiter::check`].
#[derive(Debug, Clone, Copy)]
pub struct Decision {
    pub allowed: bool,
    /// Requests left in the current window (0 when denied).
    pub remaining: u32,
    pub reset_at: Instant,
}

impl Decision {
    /// Seconds until the window resets, for a `Retry-After` header.
    pub fn retry_after_secs(&self, now: Instant) -> u64 {
        self.reset_at
            .saturating_duration_since(now)
            .as_secs()
            .max(1)
    }
}

/// Fixed-window counter over a pluggable store.
pub struct RateLimiter<S: WindowStore = MemoryStore> {
    store: S,
}

impl Default for RateLimiter<MemoryStore> {
    fn default() -> Self {
        RateLimiter::new(MemoryStore::new())
    }
}

impl<S: WindowStore> RateLimiter<S> {
    pub fn new(store: S) -> Self {
        RateLimiter { store }
    }

    /// Count one request for `identity` under `policy`.
    pub fn check(&self, identity: &str, policy: &Policy) -> Decision {
        self.check_at(identity, policy, Instant::now())
    }

    /// Deterministic variant taking an explicit clock reading.
    pub fn check_at(&self, identity: &str, policy: &Policy, now: Instant) -> Decision {
        match self.store.get(identity) {
            Some(window) if now < window.reset_at => {
                let count = window.count.saturating_add(1);
                self.store.set(
                    identity,
                    Window {
                        count,
                        reset_at: window.reset_at,
                    },
                );
                if count > policy.max_requests {
                    Decision {
                        allowed: false,
                        remaining: 0,
                        reset_at: window.reset_at,
                    }
                } else {
                    Decision {
                        allowed: true,
                        remaining: policy.max_requests - count,
                        reset_at: window.reset_at,
                    }
                }
            }
            // No record, or the previous window has expired: start fresh.
            _ => {
                let reset_at = now + policy.window;
                self.store.set(identity, Window { count: 1, reset_at });
                Decision {
                    allowed: true,
                    remaining: policy.max_requests.saturating_sub(1),
                    reset_at,
                }
            }
        }
    }

    /// Drop windows whose reset time has passed, bounding memory growth.
    pub fn sweep(&self) {
        self.store.sweep(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_calls_in_window_yield_three_allows() {
        let limiter = RateLimiter::default();
        let policy = Policy::new(1000, 3);
        let now = Instant::now();

        let results: Vec<bool> = (0..4)
            .map(|_| limiter.check_at("client-a", &policy, now).allowed)
            .collect();
        assert_eq!(results, vec![true, true, true, false]);
    }

    #[test]
    fn window_expiry_resets_the_count() {
        let limiter = RateLimiter::default();
        let policy = Policy::new(1000, 3);
        let now = Instant::now();

        for _ in 0..4 {
            limiter.check_at("client-a", &policy, now);
        }
        let later = now + Duration::from_millis(1001);
        let decision = limiter.check_at("client-a", &policy, later);
        assert!(decision.allowed);
        assert_eq!(decision.remaining, 2);
    }

    #[test]
    fn identities_are_independent() {
        let limiter = RateLimiter::default();
        let policy = Policy::new(1000, 1);
        let now = Instant::now();

        assert!(limiter.check_at("client-a", &policy, now).allowed);
        assert!(!limiter.check_at("client-a", &policy, now).allowed);
        assert!(limiter.check_at("client-b", &policy, now).allowed);
    }

    #[test]
    fn remaining_counts_down() {
        let limiter = RateLimiter::default();
        let policy = Policy::new(1000, 3);
        let now = Instant::now();

        assert_eq!(limiter.check_at("c", &policy, now).remaining, 2);
        assert_eq!(limiter.check_at("c", &policy, now).remaining, 1);
        assert_eq!(limiter.check_at("c", &policy, now).remaining, 0);
    }

    #[test]
    fn retry_after_is_at_least_one_second() {
        let limiter = RateLimiter::default();
        let policy = Policy::new(500, 1);
        let now = Instant::now();
        limiter.check_at("c", &policy, now);
        let denied = limiter.check_at("c", &policy, now);
        assert!(!denied.allowed);
        assert_eq!(denied.retry_after_secs(now), 1);
    }
}
