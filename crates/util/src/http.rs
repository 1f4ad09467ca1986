//! Streaming downloads with progress reporting.
//!
//! This module fetches a resource to a local file in chunks, invoking a
//! caller-supplied callback with cumulative byte counts after every chunk.
//! The callback shape matches what a bridged reporting window consumes, but
//! the two are independent; callers decide how updates reach a reporter.

use anyhow::{Context, anyhow};
use bytes::Bytes;
use futures_util::{Stream, StreamExt};
use std::path::Path;
use std::time::Duration;
use tokio::fs;
use tokio::io::{AsyncWrite, AsyncWriteExt, BufWriter};
use tracing::debug;
use trestle_types::DownloadProgress;

/// Ambient knobs for [`download_to_file`].
#[derive(Clone, Debug)]
pub struct DownloadConfig {
    /// TCP connect timeout
    pub connect_timeout: Duration,
    /// Overall request timeout; `None` leaves long downloads uncapped
    pub request_timeout: Option<Duration>,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
            request_timeout: None,
            user_agent: concat!("trestle/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl DownloadConfig {
    /// Build a `reqwest` client honoring these settings.
    pub fn build_client(&self) -> anyhow::Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder()
            .connect_timeout(self.connect_timeout)
            .user_agent(self.user_agent.clone());
        if let Some(timeout) = self.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder.build().map_err(|error| anyhow!(error))
    }
}

/// Download `url` to `dest`, reporting cumulative progress after every
/// chunk.
///
/// Parent directories are created as needed. A non-success status fails
/// before any byte is written. There are no retries and no resumption of
/// partial downloads; a failed download leaves whatever was written.
pub async fn download_to_file<F>(
    client: &reqwest::Client,
    url: &str,
    dest: &Path,
    mut on_progress: F,
) -> anyhow::Result<()>
where
    F: FnMut(DownloadProgress),
{
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|error| anyhow!("Network error: {}", error))?;
    let status = response.status();
    if !status.is_success() {
        return Err(anyhow!("HTTP {} while fetching {}", status, url));
    }
    let total_bytes = response.content_length();

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Creating {}", parent.display()))?;
    }
    let file = fs::File::create(dest)
        .await
        .with_context(|| format!("Creating {}", dest.display()))?;
    let mut writer = BufWriter::new(file);

    debug!(url, dest = %dest.display(), total = ?total_bytes, "starting download");
    let written =
        copy_with_progress(response.bytes_stream(), &mut writer, total_bytes, &mut on_progress).await?;
    writer.flush().await.context("Flushing download")?;
    debug!(url, bytes = written, "download finished");
    Ok(())
}

/// Copy a chunk stream into `writer`, invoking `on_progress` with cumulative
/// counts after every chunk. Returns the number of bytes written.
async fn copy_with_progress<S, E, W, F>(
    mut stream: S,
    writer: &mut W,
    total_bytes: Option<u64>,
    on_progress: &mut F,
) -> anyhow::Result<u64>
where
    S: Stream<Item = Result<Bytes, E>> + Unpin,
    E: Into<anyhow::Error>,
    W: AsyncWrite + Unpin,
    F: FnMut(DownloadProgress),
{
    let mut bytes_downloaded = 0u64;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(Into::into)?;
        writer.write_all(&chunk).await.context("Writing download chunk")?;
        bytes_downloaded += chunk.len() as u64;
        on_progress(DownloadProgress { bytes_downloaded, total_bytes });
    }
    Ok(bytes_downloaded)
}
