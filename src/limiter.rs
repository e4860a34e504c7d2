//! Outbound call limiter
//!
//! Every call to an upstream service goes through here. The limiter
//! enforces a minimum spacing between call starts and an upper bound on
//! concurrently executing calls. Excess work queues; nothing is rejected.
//!
//! The limiter itself never fails - errors from the wrapped call propagate
//! untouched.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, Semaphore};
use tokio::time::Instant;

/// Process-wide throttle for outbound API calls.
#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<Inner>,
}

struct Inner {
    permits: Semaphore,
    min_interval: Duration,
    /// Earliest instant the next call may start
    next_start: Mutex<Instant>,
}

impl RateLimiter {
    pub fn new(min_interval: Duration, max_concurrent: usize) -> Self {
        Self {
            inner: Arc::new(Inner {
                permits: Semaphore::new(max_concurrent.max(1)),
                min_interval,
                next_start: Mutex::new(Instant::now()),
            }),
        }
    }

    /// Run a unit of work under the limiter.
    ///
    /// The permit is held for the full duration of the call; the spacing
    /// slot is claimed under the lock, then waited out without holding it.
    pub async fn run<F, T>(&self, call: F) -> T
    where
        F: Future<Output = T>,
    {
        // Semaphore is never closed, acquire cannot fail
        let _permit = self
            .inner
            .permits
            .acquire()
            .await
            .expect("limiter semaphore closed");

        let slot = {
            let mut next = self.inner.next_start.lock().await;
            let now = Instant::now();
            let slot = if *next > now { *next } else { now };
            *next = slot + self.inner.min_interval;
            slot
        };
        tokio::time::sleep_until(slot).await;

        call.await
    }
}
