// src/server/metrics.rs
//! Server metrics tracking
//!
//! Simple atomic counters for request/response statistics, exposed via
//! `GET /stats`.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Server metrics collector
#[derive(Default)]
pub struct ServerMetrics {
    /// Entries accepted by `POST /entry`
    entries_created: AtomicU64,
    /// Entries rejected by validation or a malformed body
    entries_rejected: AtomicU64,
    /// Summaries returned successfully
    summaries_served: AtomicU64,
    /// Summary requests that failed
    summary_failures: AtomicU64,
    /// Normalization requests
    parse_requests: AtomicU64,
    /// Server start time
    start_time: std::sync::OnceLock<Instant>,
}

impl ServerMetrics {
    /// Create new metrics collector
    pub fn new() -> Self {
        let metrics = Self::default();
        let _ = metrics.start_time.set(Instant::now());
        metrics
    }

    pub fn record_entry_created(&self) {
        self.entries_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_entry_rejected(&self) {
        self.entries_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_summary(&self) {
        self.summaries_served.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_summary_failure(&self) {
        self.summary_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_parse(&self) {
        self.parse_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        let uptime = self
            .start_time
            .get()
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO);

        MetricsSnapshot {
            entries_created: self.entries_created.load(Ordering::Relaxed),
            entries_rejected: self.entries_rejected.load(Ordering::Relaxed),
            summaries_served: self.summaries_served.load(Ordering::Relaxed),
            summary_failures: self.summary_failures.load(Ordering::Relaxed),
            parse_requests: self.parse_requests.load(Ordering::Relaxed),
            uptime_secs: uptime.as_secs(),
        }
    }
}

/// Snapshot of current metrics
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub entries_created: u64,
    pub entries_rejected: u64,
    pub summaries_served: u64,
    pub summary_failures: u64,
    pub parse_requests: u64,
    /// Server uptime in seconds
    pub uptime_secs: u64,
}
