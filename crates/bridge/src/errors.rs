//! Error taxonomy for bridge invocations.

use crate::host::HostError;
use thiserror::Error;

/// How a single bridge invocation can fail.
///
/// Nothing is recovered locally and no error is translated; the variants
/// only classify where the failure originated. A failure surfaces at the
/// caller's await exactly as if the bridge were not present.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The consumer failed inside the reporting window. Carries the
    /// consumer's own error value, untouched.
    #[error("Progress consumer failed: {0}")]
    Consumer(#[source] anyhow::Error),

    /// The host primitive failed on its own, before or after the relay.
    #[error("Progress host failed: {0}")]
    Host(#[from] HostError),

    /// The bridge went away without resuming. Not a legal outcome of a
    /// correct bridge; exists so the awaiter fails instead of hanging.
    #[error("Reporting bridge dropped before resuming its caller")]
    Abandoned,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consumer_failure_keeps_the_original_message() {
        let err = BridgeError::Consumer(anyhow::anyhow!("manifest truncated"));
        assert_eq!(err.to_string(), "Progress consumer failed: manifest truncated");
    }

    #[test]
    fn host_failure_converts_from_host_error() {
        let err = BridgeError::from(HostError::unavailable("no window"));
        assert!(matches!(err, BridgeError::Host(HostError::Unavailable { .. })));
    }
}
