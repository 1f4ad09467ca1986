//! Host-side collaborator traits.
//!
//! The bridge consumes two capabilities the host owns: a reporting
//! primitive ([`ProgressHost`]) and the opaque handle it passes out during a
//! reporting window ([`ProgressReporter`]). Neither is implemented here;
//! hosts bring their own.

use thiserror::Error;

/// The value slot the host's relay signature requires.
///
/// No known host gives the value meaning; relays always hand back `None`.
pub type RelayValue = Option<serde_json::Value>;

/// Signature the host primitive imposes on relay callbacks.
///
/// The host invokes the relay synchronously, at most once, with a reporter
/// handle that is valid only for the duration of the invocation. A relay
/// error must come back out of [`ProgressHost::report_raw`] as
/// [`HostError::Relay`], carrying the error value unchanged.
pub type Relay<'a> = dyn FnMut(&mut dyn ProgressReporter) -> Result<RelayValue, anyhow::Error> + 'a;

/// Handle a host passes to a consumer during one reporting window.
///
/// The handle is borrowed for the window only; retaining it past the
/// consumer's return is unrepresentable.
pub trait ProgressReporter {
    /// Set the primary progress text.
    fn text(&mut self, text: &str);

    /// Set the secondary detail line.
    fn details(&mut self, details: &str);

    /// Set the completed fraction, expected in `0.0..=1.0`.
    fn fraction(&mut self, fraction: f64);
}

/// The host's reporting primitive.
pub trait ProgressHost {
    /// Open a reporting window and run `relay` inside it.
    ///
    /// Contract: the relay is invoked synchronously at most once; the
    /// method returns only after the window has closed. Whether the relay
    /// runs on the calling thread or elsewhere is the host's choice.
    fn report_raw(&mut self, relay: &mut Relay<'_>) -> Result<(), HostError>;
}

/// Failures of the host primitive itself.
#[derive(Debug, Error)]
pub enum HostError {
    /// The relay (and therefore the consumer inside it) failed.
    #[error("Relay failed: {0}")]
    Relay(#[source] anyhow::Error),

    #[error("Reporting window unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("Host rejected the report: {reason}")]
    Rejected { reason: String },
}

impl HostError {
    /// Wrap a relay failure, leaving the error value untouched.
    pub fn relay(source: anyhow::Error) -> Self {
        Self::Relay(source)
    }

    /// Create an unavailable-window error.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable { reason: reason.into() }
    }

    /// Create a rejected-report error.
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected { reason: reason.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_error_constructors() {
        let err = HostError::relay(anyhow::anyhow!("consumer tripped"));
        assert!(matches!(err, HostError::Relay(_)));

        let err = HostError::unavailable("indicator detached");
        assert!(matches!(err, HostError::Unavailable { .. }));
        assert_eq!(err.to_string(), "Reporting window unavailable: indicator detached");

        let err = HostError::rejected("window already open");
        assert!(matches!(err, HostError::Rejected { .. }));
    }
}
