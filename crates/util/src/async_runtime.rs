//! Async runtime helpers for synchronous host entry points.
//!
//! Hosts frequently enter a plugin through a synchronous callback while the
//! plugin's own work (a bridged reporting window, a streaming download) is
//! async. This module is the one place where that boundary is crossed.

use anyhow::anyhow;
use std::future::Future;
use tokio::{runtime::Handle, task};

/// Run a future to completion from a synchronous host callback.
///
/// # Arguments
/// - `future`: The future to run to completion.
///
/// # Returns
/// The future's own output, unchanged; a bridged suspension keeps its
/// `Result` shape inside the outer one.
///
/// # Notes
/// - Reuses the ambient Tokio runtime when the callback arrives on one of
///   its worker threads.
/// - Falls back to a throwaway current-thread runtime for call sites
///   outside Tokio; fails only if that runtime cannot be built.
pub fn block_in_host<F>(future: F) -> anyhow::Result<F::Output>
where
    F: Future,
{
    if let Ok(handle) = Handle::try_current() {
        Ok(task::block_in_place(|| handle.block_on(future)))
    } else {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|error| anyhow!(error))?;
        Ok(runtime.block_on(future))
    }
}
