//! Batch throughput reporting.
//!
//! Counts successfully processed images and, each time a full batch is
//! reached, logs how long that batch took, then starts a new batch. Partial
//! batches are never reported.

use std::time::{Duration, Instant};

/// Snapshot of one completed batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchStats {
    /// Images in the batch.
    pub images: u64,
    /// Wall-clock time since the previous batch ended (or since start).
    pub elapsed: Duration,
}

impl BatchStats {
    /// Images per second (0 if elapsed is 0).
    pub fn images_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs <= 0.0 {
            return 0.0;
        }
        self.images as f64 / secs
    }
}

#[derive(Debug)]
pub struct ProgressReporter {
    every: u64,
    count: u64,
    started: Instant,
    batches: u64,
}

impl ProgressReporter {
    /// Report every `every` images; 0 disables reporting entirely.
    pub fn new(every: u64) -> Self {
        Self::starting_at(every, Instant::now())
    }

    pub fn starting_at(every: u64, started: Instant) -> Self {
        Self {
            every,
            count: 0,
            started,
            batches: 0,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.every > 0
    }

    /// Full batches logged so far.
    pub fn batches_reported(&self) -> u64 {
        self.batches
    }

    /// Count one processed image; logs and returns the batch stats when a batch completes.
    pub fn record_success(&mut self) -> Option<BatchStats> {
        self.record_at(Instant::now())
    }

    pub fn record_at(&mut self, now: Instant) -> Option<BatchStats> {
        if !self.is_enabled() {
            return None;
        }
        self.count += 1;
        if self.count < self.every {
            return None;
        }
        let stats = BatchStats {
            images: self.count,
            elapsed: now.saturating_duration_since(self.started),
        };
        tracing::info!(
            images_per_sec = stats.images_per_sec(),
            "processed {} images, took {:.0} seconds",
            stats.images,
            stats.elapsed.as_secs_f64()
        );
        self.count = 0;
        self.started = now;
        self.batches += 1;
        Some(stats)
    }
}
