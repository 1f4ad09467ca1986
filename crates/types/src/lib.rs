//! Trestle shared type definitions.
//!
//! Plain data exchanged between the bridge crate, host implementations, and
//! callers: reporter snapshots, bridge lifecycle states, and download
//! progress counters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a single bridge invocation.
///
/// Transitions are strictly sequential and irreversible:
/// `Pending` → `Reporting` → `Resumed`. There is no path back from
/// `Resumed`; the bridge traces transitions as it makes them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BridgeState {
    /// Bridge called; the host primitive has not invoked the relay yet.
    Pending,
    /// The relay is executing the consumer.
    Reporting,
    /// The continuation has been resumed. Terminal.
    Resumed,
}

impl fmt::Display for BridgeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BridgeState::Pending => "pending",
            BridgeState::Reporting => "reporting",
            BridgeState::Resumed => "resumed",
        };
        f.write_str(label)
    }
}

/// Last values written through a progress reporter during one reporting
/// window.
///
/// A plain mirror of reporter state, suitable for structured logging or for
/// asserting on in tests. Fields stay `None` until the corresponding setter
/// has been called at least once.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// Primary progress text (e.g., "Downloading mappings")
    #[serde(default)]
    pub text: Option<String>,
    /// Secondary detail line (e.g., the file currently being written)
    #[serde(default)]
    pub details: Option<String>,
    /// Completed fraction in `0.0..=1.0`, when known
    #[serde(default)]
    pub fraction: Option<f64>,
}

/// Cumulative byte counts reported while a download streams to disk.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DownloadProgress {
    /// Bytes written to the destination so far
    pub bytes_downloaded: u64,
    /// Declared content length, when the server sent one
    pub total_bytes: Option<u64>,
}

impl DownloadProgress {
    /// Completed fraction in `0.0..=1.0`.
    ///
    /// Returns `None` when the total is unknown or zero. Servers
    /// occasionally under-declare the content length; the value is clamped
    /// so callers can feed it straight into a reporter.
    pub fn fraction(&self) -> Option<f64> {
        match self.total_bytes {
            Some(total) if total > 0 => Some((self.bytes_downloaded as f64 / total as f64).min(1.0)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_with_known_total() {
        let progress = DownloadProgress {
            bytes_downloaded: 250,
            total_bytes: Some(1000),
        };
        assert_eq!(progress.fraction(), Some(0.25));
    }

    #[test]
    fn fraction_without_total_is_none() {
        let progress = DownloadProgress {
            bytes_downloaded: 250,
            total_bytes: None,
        };
        assert_eq!(progress.fraction(), None);

        let progress = DownloadProgress {
            bytes_downloaded: 0,
            total_bytes: Some(0),
        };
        assert_eq!(progress.fraction(), None, "zero totals must not divide");
    }

    #[test]
    fn fraction_clamps_past_declared_total() {
        let progress = DownloadProgress {
            bytes_downloaded: 2048,
            total_bytes: Some(1024),
        };
        assert_eq!(progress.fraction(), Some(1.0));
    }

    #[test]
    fn bridge_state_display_labels() {
        assert_eq!(BridgeState::Pending.to_string(), "pending");
        assert_eq!(BridgeState::Reporting.to_string(), "reporting");
        assert_eq!(BridgeState::Resumed.to_string(), "resumed");
    }

    #[test]
    fn snapshot_serializes_with_stable_field_names() {
        let snapshot = ProgressSnapshot {
            text: Some("Indexing".to_string()),
            details: None,
            fraction: Some(0.4),
        };
        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"text": "Indexing", "details": null, "fraction": 0.4})
        );
    }

    #[test]
    fn snapshot_default_is_empty() {
        let snapshot = ProgressSnapshot::default();
        assert_eq!(snapshot.text, None);
        assert_eq!(snapshot.details, None);
        assert_eq!(snapshot.fraction, None);
    }
}
