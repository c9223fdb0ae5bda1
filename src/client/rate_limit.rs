//! Reactive rate limiting for upstream requests
//!
//! The limiter stays dormant until the API answers 429. After that, every request
//! waits for a token. The rejected request itself is not retried.

use std::num::NonZeroU32;
use std::sync::atomic::{AtomicBool, Ordering};

use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use log::debug;

/// Requests per second allowed once throttling is active.
pub const THROTTLED_RATE_PER_SECOND: u32 = 10;

/// Rate limiter that only applies after the upstream signals overload.
pub struct ReactiveLimiter {
    limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    active: AtomicBool,
}

impl Default for ReactiveLimiter {
    fn default() -> Self {
        Self::new(THROTTLED_RATE_PER_SECOND)
    }
}

impl ReactiveLimiter {
    /// Create a dormant limiter with the given per-second quota.
    pub fn new(per_second: u32) -> Self {
        let quota = Quota::per_second(NonZeroU32::new(per_second).unwrap_or(NonZeroU32::MIN));

        Self {
            limiter: RateLimiter::direct(quota),
            active: AtomicBool::new(false),
        }
    }

    /// Start throttling (called on 429).
    pub fn activate(&self) {
        let was_active = self.active.swap(true, Ordering::SeqCst);
        if !was_active {
            debug!("Upstream rate limiting activated");
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Wait for permission if throttling is active.
    pub async fn wait_if_active(&self) {
        if self.is_active() {
            self.limiter.until_ready().await;
        }
    }
}
