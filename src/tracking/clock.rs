//! Cycle cadence abstraction
//!
//! The tracker never sleeps directly; it asks its clock to wait between
//! cycles, so tests can run the loop without wall-clock delay.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Timer seam for the inter-cycle pause
#[async_trait]
pub trait CycleClock: Send {
    async fn wait(&mut self, interval: Duration);
}

/// Wall-clock implementation backed by the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

#[async_trait]
impl CycleClock for TokioClock {
    async fn wait(&mut self, interval: Duration) {
        tokio::time::sleep(interval).await;
    }
}

/// Test clock that records requested waits and returns immediately.
///
/// Clones share the recorded history, so a handle kept outside the
/// tracker can inspect the waits the loop performed.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    waits: Arc<Mutex<Vec<Duration>>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits requested so far, in order
    pub fn waits(&self) -> Vec<Duration> {
        self.waits.lock().expect("clock history poisoned").clone()
    }
}

#[async_trait]
impl CycleClock for ManualClock {
    async fn wait(&mut self, interval: Duration) {
        self.waits
            .lock()
            .expect("clock history poisoned")
            .push(interval);
    }
}
