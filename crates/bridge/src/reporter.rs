//! Reporter implementations.

use crate::host::ProgressReporter;
use trestle_types::ProgressSnapshot;

/// A [`ProgressReporter`] that records the last written values into a
/// [`ProgressSnapshot`].
///
/// Useful for hosts that surface progress out-of-band, for structured
/// logging of a reporting window, and for asserting on reporter traffic in
/// tests.
#[derive(Debug, Default)]
pub struct SnapshotReporter {
    snapshot: ProgressSnapshot,
}

impl SnapshotReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the recorded values.
    pub fn snapshot(&self) -> &ProgressSnapshot {
        &self.snapshot
    }

    /// Consume the reporter, keeping the recording.
    pub fn into_snapshot(self) -> ProgressSnapshot {
        self.snapshot
    }
}

impl ProgressReporter for SnapshotReporter {
    fn text(&mut self, text: &str) {
        self.snapshot.text = Some(text.to_string());
    }

    fn details(&mut self, details: &str) {
        self.snapshot.details = Some(details.to_string());
    }

    fn fraction(&mut self, fraction: f64) {
        self.snapshot.fraction = Some(fraction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_last_written_values() {
        let mut reporter = SnapshotReporter::new();
        reporter.text("Downloading index");
        reporter.text("Rewriting sources");
        reporter.details("src/core/session.rs");
        reporter.fraction(0.5);

        let snapshot = reporter.into_snapshot();
        assert_eq!(snapshot.text.as_deref(), Some("Rewriting sources"));
        assert_eq!(snapshot.details.as_deref(), Some("src/core/session.rs"));
        assert_eq!(snapshot.fraction, Some(0.5));
    }

    #[test]
    fn starts_empty() {
        let reporter = SnapshotReporter::new();
        assert_eq!(*reporter.snapshot(), ProgressSnapshot::default());
    }
}
