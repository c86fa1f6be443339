//! Rate limiting for outbound API calls
//!
//! Public geocoding services (Nominatim in particular) ask clients to stay
//! under a fixed request rate. The limiter here is a token bucket keyed by
//! host. [`RateLimiter::reserve`] always takes a token and tells the caller
//! how long to sleep before using it, so concurrent callers queue up instead
//! of being rejected.
//!
//! # Example
//!
//! ```rust
//! use ferias_core::rate_limit::{RateLimitConfig, RateLimiter};
//!
//! let limiter = RateLimiter::new(RateLimitConfig::per_second(1));
//!
//! let wait = limiter.reserve("nominatim.openstreetmap.org");
//! assert!(wait.is_zero());
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Rate limiter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Maximum requests per window
    pub max_requests: u32,
    /// Time window duration
    pub window: Duration,
    /// Burst allowance (extra requests allowed in short bursts)
    pub burst: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self::per_second(1)
    }
}

impl RateLimitConfig {
    /// Create a strict rate limit (no burst)
    #[must_use]
    pub fn strict(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            burst: 0,
        }
    }

    /// Per-second rate limit without burst
    #[must_use]
    pub fn per_second(max: u32) -> Self {
        Self::strict(max.max(1), Duration::from_secs(1))
    }

    /// Effectively unlimited, for tests and local mirrors
    #[must_use]
    pub fn unlimited() -> Self {
        Self {
            max_requests: u32::MAX / 2,
            window: Duration::from_secs(1),
            burst: 0,
        }
    }

    fn capacity(&self) -> f64 {
        f64::from(self.max_requests.saturating_add(self.burst))
    }

    fn refill_rate(&self) -> f64 {
        f64::from(self.max_requests) / self.window.as_secs_f64()
    }
}

/// Token bucket state
///
/// `tokens` may go negative when callers reserve ahead of time; the deficit
/// is the queue of pending reservations.
#[derive(Debug)]
struct TokenBucket {
    tokens: f64,
    last_update: Instant,
}

impl TokenBucket {
    fn new(config: &RateLimitConfig) -> Self {
        Self {
            tokens: config.capacity(),
            last_update: Instant::now(),
        }
    }

    fn refill(&mut self, config: &RateLimitConfig) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_update);
        let new_tokens = elapsed.as_secs_f64() * config.refill_rate();

        self.tokens = (self.tokens + new_tokens).min(config.capacity());
        self.last_update = now;
    }

    fn reserve(&mut self, config: &RateLimitConfig) -> Duration {
        self.refill(config);
        self.tokens -= 1.0;

        if self.tokens >= 0.0 {
            Duration::ZERO
        } else {
            Duration::from_secs_f64(-self.tokens / config.refill_rate())
        }
    }
}

/// Rate limiter with one bucket per key
#[derive(Clone)]
pub struct RateLimiter {
    buckets: Arc<Mutex<HashMap<String, TokenBucket>>>,
    config: RateLimitConfig,
}

impl RateLimiter {
    /// Create a new rate limiter
    #[must_use]
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            buckets: Arc::new(Mutex::new(HashMap::new())),
            config,
        }
    }

    /// Configuration shared by every bucket
    #[must_use]
    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    /// Take a token for the given key and return how long to wait before using it
    #[must_use]
    pub fn reserve(&self, key: &str) -> Duration {
        self.with_bucket(key, |bucket, config| bucket.reserve(config))
    }

    fn with_bucket<T>(&self, key: &str, f: impl FnOnce(&mut TokenBucket, &RateLimitConfig) -> T) -> T {
        // A poisoned lock still holds valid bucket data.
        let mut buckets = self.buckets.lock().unwrap_or_else(|e| e.into_inner());
        let bucket = buckets
            .entry(key.to_string())
            .or_insert_with(|| TokenBucket::new(&self.config));
        f(bucket, &self.config)
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_within_capacity_does_not_wait() {
        let limiter = RateLimiter::new(RateLimitConfig::strict(3, Duration::from_secs(60)));

        assert_eq!(limiter.reserve("test"), Duration::ZERO);
        assert_eq!(limiter.reserve("test"), Duration::ZERO);
        assert_eq!(limiter.reserve("test"), Duration::ZERO);
        assert!(limiter.reserve("test") > Duration::from_secs(10));
    }

    #[test]
    fn test_keys_have_separate_buckets() {
        let limiter = RateLimiter::new(RateLimitConfig::strict(1, Duration::from_secs(60)));

        assert_eq!(limiter.reserve("key1"), Duration::ZERO);
        assert!(limiter.reserve("key1") > Duration::ZERO);
        assert_eq!(limiter.reserve("key2"), Duration::ZERO);
    }

    #[test]
    fn test_reserve_queues_callers() {
        let limiter = RateLimiter::new(RateLimitConfig::per_second(1));

        assert_eq!(limiter.reserve("geo"), Duration::ZERO);

        let second = limiter.reserve("geo");
        let third = limiter.reserve("geo");
        assert!(second > Duration::from_millis(900), "second wait: {second:?}");
        assert!(third > second, "waits should grow: {second:?} then {third:?}");
    }

    #[test]
    fn test_unlimited_never_waits() {
        let limiter = RateLimiter::new(RateLimitConfig::unlimited());
        for _ in 0..100 {
            assert_eq!(limiter.reserve("local"), Duration::ZERO);
        }
    }
}
