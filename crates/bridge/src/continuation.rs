//! One-shot continuation machinery.
//!
//! A [`Continuation`] is the resumable half of a suspended call; a
//! [`Suspension`] is the awaitable half. The pair is backed by a
//! `tokio::sync::oneshot` channel, so a resumption is delivered exactly
//! once regardless of which thread performs it.

use crate::errors::BridgeError;
use tokio::sync::oneshot;
use tracing::debug;

/// The rest of a suspended caller's computation.
///
/// Held by a bridge for the duration of one invocation. `resume` consumes
/// the continuation, so resuming twice is unrepresentable.
pub struct Continuation<T = ()> {
    tx: oneshot::Sender<Result<T, BridgeError>>,
}

/// The awaitable half of a continuation pair.
pub struct Suspension<T = ()> {
    rx: oneshot::Receiver<Result<T, BridgeError>>,
}

impl<T> Continuation<T> {
    /// Create a fresh continuation together with the suspension that will
    /// observe its resumption.
    pub fn pair() -> (Continuation<T>, Suspension<T>) {
        let (tx, rx) = oneshot::channel();
        (Continuation { tx }, Suspension { rx })
    }

    /// Resume the suspended caller with `result`.
    ///
    /// If the awaiter has already gone away the result is discarded; the
    /// caller stopped caring, which is not an error here.
    pub fn resume(self, result: Result<T, BridgeError>) {
        if self.tx.send(result).is_err() {
            debug!("resumed a continuation whose awaiter was dropped");
        }
    }
}

impl<T> Suspension<T> {
    /// Wait for the single resumption.
    ///
    /// A continuation dropped without resuming is a bridge bug, not a legal
    /// outcome; it surfaces as [`BridgeError::Abandoned`] rather than a
    /// hang or a panic.
    pub async fn wait(self) -> Result<T, BridgeError> {
        match self.rx.await {
            Ok(result) => result,
            Err(_) => Err(BridgeError::Abandoned),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn pair_delivers_resumed_value() {
        let (continuation, suspension) = Continuation::<u32>::pair();
        continuation.resume(Ok(7));
        assert_eq!(suspension.wait().await.unwrap(), 7);
    }

    #[tokio::test]
    async fn pair_delivers_resumed_failure() {
        let (continuation, suspension) = Continuation::<()>::pair();
        continuation.resume(Err(BridgeError::Abandoned));
        assert!(matches!(suspension.wait().await, Err(BridgeError::Abandoned)));
    }

    #[tokio::test]
    async fn unresumed_drop_surfaces_abandoned() {
        let (continuation, suspension) = Continuation::<()>::pair();
        drop(continuation);
        assert!(matches!(suspension.wait().await, Err(BridgeError::Abandoned)));
    }

    #[test]
    fn resume_after_awaiter_dropped_is_a_noop() {
        let (continuation, suspension) = Continuation::<()>::pair();
        drop(suspension);
        continuation.resume(Ok(()));
    }
}
