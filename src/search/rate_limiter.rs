// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Politeness throttle for page fetches
//!
//! Spaces consecutive fetches by a fixed interval. The first fetch passes
//! immediately; each following one waits until the interval has elapsed.

use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as GovRateLimiter};
use std::sync::Arc;
use std::time::Duration;

/// Fixed-interval limiter shared by the fetches of one pipeline run
#[derive(Clone)]
pub struct FetchThrottle {
    limiter: Option<Arc<GovRateLimiter<NotKeyed, InMemoryState, DefaultClock>>>,
    interval: Duration,
}

impl FetchThrottle {
    /// Create a throttle
    ///
    /// # Arguments
    /// * `interval` - Minimum spacing between fetches; zero disables throttling
    pub fn new(interval: Duration) -> Self {
        // with_period returns None for a zero interval
        let limiter = Quota::with_period(interval).map(|quota| Arc::new(GovRateLimiter::direct(quota)));

        Self { limiter, interval }
    }

    /// Wait until the next fetch is allowed
    pub async fn wait(&self) {
        if let Some(limiter) = &self.limiter {
            limiter.until_ready().await;
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_enabled(&self) -> bool {
        self.limiter.is_some()
    }
}
