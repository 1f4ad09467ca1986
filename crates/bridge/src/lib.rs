//! Callback-to-suspension progress bridging.
//!
//! Plugins that run inside a host process are often written against a
//! suspension (async/await) model while the host's progress-reporting
//! primitive is callback based. This crate adapts exactly one call shape
//! between the two: a single synchronous callback invocation, no result
//! value, no cancellation of its own. It is not an async framework: there
//! is no queuing, no retry, no backpressure. Each bridge invocation is an
//! independent, self-contained handoff.

pub mod bridge;
pub mod continuation;
pub mod errors;
pub mod host;
pub mod reporter;

pub use bridge::{bridge, with_progress};
pub use continuation::{Continuation, Suspension};
pub use errors::BridgeError;
pub use host::{HostError, ProgressHost, ProgressReporter, Relay, RelayValue};
pub use reporter::SnapshotReporter;
