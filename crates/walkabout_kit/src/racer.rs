//! Race two URLs and report which answered first.

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use tracing::debug;

/// Default time to wait for either URL.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Error type for [`racer`] and [`configurable_racer`].
#[derive(Debug, Error)]
pub enum RacerError {
    /// Neither URL answered in time.
    #[error("timed out waiting for {a} and {b}")]
    Timeout { a: String, b: String },

    /// Failed to build HTTP client.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Requests `a` and `b` concurrently and returns whichever URL answers first.
///
/// Gives up after [`DEFAULT_TIMEOUT`].
pub async fn racer(a: &str, b: &str) -> Result<String, RacerError> {
    configurable_racer(a, b, DEFAULT_TIMEOUT).await
}

/// Like [`racer`], with an explicit timeout.
///
/// A request that completes counts as an answer whatever its status, and so
/// does one that fails at the transport level. The slower request is dropped.
pub async fn configurable_racer(a: &str, b: &str, timeout: Duration) -> Result<String, RacerError> {
    let client = Client::builder().build()?;

    let winner = tokio::select! {
        _ = ping(&client, a) => a,
        _ = ping(&client, b) => b,
        _ = tokio::time::sleep(timeout) => {
            debug!("Racer timed out after {:?}", timeout);
            return Err(RacerError::Timeout {
                a: a.to_string(),
                b: b.to_string(),
            });
        }
    };

    debug!("Racer winner: {}", winner);
    Ok(winner.to_string())
}

async fn ping(client: &Client, url: &str) {
    match client.get(url).send().await {
        Ok(response) => debug!("{} answered with {}", url, response.status()),
        Err(e) => debug!("{} failed: {}", url, e),
    }
}
