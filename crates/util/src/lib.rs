//! Trestle utility helpers.
//!
//! Host-independent plumbing around the bridge: a streaming download that
//! reports byte-level progress, and the single place where synchronous host
//! entry points cross into async code.

pub mod async_runtime;
pub mod http;

pub use async_runtime::block_in_host;
pub use http::{DownloadConfig, download_to_file};
