//! The core callback-to-suspension bridge.
//!
//! [`bridge`] opens the host's reporting window with a relay function,
//! runs the caller's consumer inside it, and resumes the caller's
//! continuation once the window has closed. The relay exists only to adapt
//! call signatures: it hands the consumer the reporter the host delivered,
//! then returns the placeholder value the host's relay slot requires.

use crate::continuation::Continuation;
use crate::errors::BridgeError;
use crate::host::{HostError, ProgressHost, ProgressReporter};
use tracing::{trace, warn};
use trestle_types::BridgeState;

/// Invoke the host's reporting primitive and resume `continuation` with its
/// outcome.
///
/// The consumer runs synchronously, at most once, on whichever execution
/// context the host primitive chooses; the reporter handle it receives is
/// valid only until it returns. The continuation is resumed exactly once,
/// strictly after both the host primitive and the consumer have finished.
///
/// A consumer failure travels out through the host's own error path and
/// comes back classified as [`BridgeError::Consumer`], the error value
/// untouched. A host failure resumes the continuation with
/// [`BridgeError::Host`]. Nothing is retried or swallowed.
pub fn bridge<H, F>(host: &mut H, continuation: Continuation, consumer: F)
where
    H: ProgressHost + ?Sized,
    F: FnOnce(&mut dyn ProgressReporter) -> anyhow::Result<()>,
{
    trace!(state = %BridgeState::Pending, "opening reporting window");
    let mut consumer = Some(consumer);
    let outcome = host.report_raw(&mut |reporter| match consumer.take() {
        Some(consume) => {
            trace!(state = %BridgeState::Reporting, "relay invoked");
            consume(reporter)?;
            // The host's relay slot wants a value back; there is nothing
            // meaningful to hand it.
            Ok(None)
        }
        None => {
            warn!("host invoked the relay more than once; consumer already ran");
            Ok(None)
        }
    });

    let result = match outcome {
        Ok(()) => Ok(()),
        // A relay error is the consumer's own failure coming back around
        // through the host's error path.
        Err(HostError::Relay(err)) => Err(BridgeError::Consumer(err)),
        Err(err) => Err(BridgeError::Host(err)),
    };
    trace!(state = %BridgeState::Resumed, ok = result.is_ok(), "resuming caller");
    continuation.resume(result);
}

/// Suspend until the host's reporting primitive has run `consumer` to
/// completion.
///
/// The async face of [`bridge`]: makes a continuation pair, bridges on the
/// current thread, and awaits the resumption. Callers that need the host
/// primitive on a different execution context keep the halves apart: run
/// [`bridge`] wherever the host wants it and await the
/// [`Suspension`](crate::continuation::Suspension) elsewhere.
pub async fn with_progress<H, F>(host: &mut H, consumer: F) -> Result<(), BridgeError>
where
    H: ProgressHost + ?Sized,
    F: FnOnce(&mut dyn ProgressReporter) -> anyhow::Result<()>,
{
    let (continuation, suspension) = Continuation::pair();
    bridge(host, continuation, consumer);
    suspension.wait().await
}
