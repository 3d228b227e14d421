//! Throughput counters shared by all request tasks.
//!
//! `Stats` holds two monotonic atomic counters. Every request task increments
//! `requests_sent` after a successful write and `quotes_received` after a
//! successful read, in that order, so `quotes_received <= requests_sent` holds
//! whenever the counters are observed through [`Stats::snapshot`].
use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use quote_common::Result;
use serde::Serialize;

/// Lock-free request/quote counters.
#[derive(Debug, Default)]
pub struct Stats {
    requests_sent: AtomicU64,
    quotes_received: AtomicU64,
}

impl Stats {
    /// Fresh counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a request line that was written successfully.
    pub fn record_request(&self) {
        self.requests_sent.fetch_add(1, Ordering::SeqCst);
    }

    /// Count a response that was read successfully.
    pub fn record_quote(&self) {
        self.quotes_received.fetch_add(1, Ordering::SeqCst);
    }

    /// Requests written so far.
    pub fn requests_sent(&self) -> u64 {
        self.requests_sent.load(Ordering::SeqCst)
    }

    /// Quotes read so far.
    pub fn quotes_received(&self) -> u64 {
        self.quotes_received.load(Ordering::SeqCst)
    }

    /// Read both counters for a run of `length`.
    ///
    /// Tasks still in flight may keep counting after this returns.
    pub fn snapshot(&self, length: Duration) -> StatsSnapshot {
        // Quotes first: a quote is only counted after its request.
        let quotes = self.quotes_received();
        let requests = self.requests_sent();
        StatsSnapshot {
            quotes,
            requests,
            length_secs: length.as_secs_f64(),
        }
    }
}

/// Output format of the final summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// `Quotes: N`, `Requests: N`, `Req per sec: X.XX` on three lines.
    #[default]
    Human,
    /// One JSON object on a single line.
    Json,
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatsSnapshot {
    /// Quotes received.
    pub quotes: u64,
    /// Requests sent.
    pub requests: u64,
    /// Configured run length in seconds.
    pub length_secs: f64,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    snapshot: &'a StatsSnapshot,
    req_per_sec: f64,
}

impl StatsSnapshot {
    /// Requests sent divided by the configured run length.
    pub fn requests_per_sec(&self) -> f64 {
        if self.length_secs > 0.0 {
            self.requests as f64 / self.length_secs
        } else {
            0.0
        }
    }

    /// Write the summary to `out` in the given format.
    pub fn report<W: Write>(&self, format: ReportFormat, out: &mut W) -> Result<()> {
        match format {
            ReportFormat::Human => {
                writeln!(out, "Quotes: {}", self.quotes)?;
                writeln!(out, "Requests: {}", self.requests)?;
                writeln!(out, "Req per sec: {:.2}", self.requests_per_sec())?;
            }
            ReportFormat::Json => {
                let report = JsonReport {
                    snapshot: self,
                    req_per_sec: self.requests_per_sec(),
                };
                serde_json::to_writer(&mut *out, &report)?;
                writeln!(out)?;
            }
        }
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn counters_start_at_zero() {
        let stats = Stats::new();
        let snapshot = stats.snapshot(Duration::from_secs(60));
        assert_eq!(snapshot.quotes, 0);
        assert_eq!(snapshot.requests, 0);
        assert_eq!(snapshot.requests_per_sec(), 0.0);
    }

    #[test]
    fn concurrent_increments_are_not_lost() {
        let stats = Arc::new(Stats::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let stats = Arc::clone(&stats);
                thread::spawn(move || {
                    for _ in 0..1_000 {
                        stats.record_request();
                        stats.record_quote();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(stats.requests_sent(), 8_000);
        assert_eq!(stats.quotes_received(), 8_000);
    }

    #[test]
    fn snapshot_never_shows_more_quotes_than_requests() {
        let stats = Arc::new(Stats::new());
        let writers: Vec<_> = (0..4)
            .map(|_| {
                let stats = Arc::clone(&stats);
                thread::spawn(move || {
                    for _ in 0..20_000 {
                        stats.record_request();
                        stats.record_quote();
                    }
                })
            })
            .collect();
        while writers.iter().any(|w| !w.is_finished()) {
            let snapshot = stats.snapshot(Duration::from_secs(1));
            assert!(snapshot.quotes <= snapshot.requests, "{snapshot:?}");
        }
        for writer in writers {
            writer.join().unwrap();
        }
    }

    #[test]
    fn human_report_lines() {
        let snapshot = StatsSnapshot {
            quotes: 9,
            requests: 10,
            length_secs: 1.0,
        };
        let mut out = Vec::new();
        snapshot.report(ReportFormat::Human, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Quotes: 9\nRequests: 10\nReq per sec: 10.00\n"
        );
    }

    #[test]
    fn rate_uses_configured_length() {
        let snapshot = StatsSnapshot {
            quotes: 598,
            requests: 600,
            length_secs: 60.0,
        };
        assert_eq!(snapshot.requests_per_sec(), 10.0);

        let snapshot = StatsSnapshot {
            quotes: 1,
            requests: 1,
            length_secs: 3.0,
        };
        let mut out = Vec::new();
        snapshot.report(ReportFormat::Human, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().ends_with("Req per sec: 0.33\n"));
    }

    #[test]
    fn json_report_is_one_object() {
        let snapshot = StatsSnapshot {
            quotes: 4,
            requests: 5,
            length_secs: 2.0,
        };
        let mut out = Vec::new();
        snapshot.report(ReportFormat::Json, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["quotes"], 4);
        assert_eq!(value["requests"], 5);
        assert_eq!(value["length_secs"], 2.0);
        assert_eq!(value["req_per_sec"], 2.5);
    }
}
