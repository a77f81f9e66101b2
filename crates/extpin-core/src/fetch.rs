//! HTTP GET with rate-limit backoff.
//!
//! The marketplace throttles aggressively. A 429 response carries a
//! `Retry-After` interval which we honor (plus a safety margin) and retry
//! without limit; every other non-OK status is a hard failure.

use std::time::Duration;

use reqwest::header::{self, HeaderValue};
use reqwest::{Client, Response, StatusCode};
use thiserror::Error;

use crate::Reporter;

/// Fixed safety margin added to every server-declared retry interval.
pub const RETRY_MARGIN_SECS: u64 = 5;

/// Errors produced while fetching a marketplace URL.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A 429 response without a usable numeric `Retry-After` header. The
    /// declared interval is never guessed at.
    #[error("rate limited, but the Retry-After header is {0}")]
    RetryAfter(String),

    /// Any non-200, non-429 response, carrying the status text.
    #[error("{0}")]
    Status(String),
}

/// Issue a GET against `url`, retrying rate-limited responses indefinitely.
///
/// On success the live [`Response`] is returned; the caller is responsible
/// for consuming the body. Dropping the response releases the connection.
///
/// # Errors
///
/// Returns [`FetchError::Status`] for any non-200, non-429 status (never
/// retried), [`FetchError::RetryAfter`] when a 429 response lacks a numeric
/// retry interval, and [`FetchError::Http`] on transport failures.
pub async fn get<R: Reporter>(
    client: &Client,
    url: &str,
    reporter: &R,
) -> Result<Response, FetchError> {
    get_with_margin(client, url, RETRY_MARGIN_SECS, reporter).await
}

/// Same as [`get`], with an explicit backoff margin so tests can exercise
/// the retry path without real sleeps.
pub async fn get_with_margin<R: Reporter>(
    client: &Client,
    url: &str,
    margin_secs: u64,
    reporter: &R,
) -> Result<Response, FetchError> {
    // Explicit loop, not recursion: the retry policy is unbounded and must
    // not grow the stack. An operator interrupts persistent failure.
    loop {
        let response = client
            .get(url)
            .header(header::USER_AGENT, crate::USER_AGENT)
            .send()
            .await?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            let secs = backoff_secs(response.headers().get(header::RETRY_AFTER), margin_secs)?;
            reporter.waiting(secs);
            tracing::debug!(url, secs, "rate limited, backing off");
            tokio::time::sleep(Duration::from_secs(secs)).await;
            continue;
        }

        if response.status() != StatusCode::OK {
            return Err(FetchError::Status(response.status().to_string()));
        }

        return Ok(response);
    }
}

/// Compute the backoff duration from a `Retry-After` header value.
fn backoff_secs(header: Option<&HeaderValue>, margin_secs: u64) -> Result<u64, FetchError> {
    let value = header.ok_or_else(|| FetchError::RetryAfter("missing".to_string()))?;
    let secs = value
        .to_str()
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .ok_or_else(|| FetchError::RetryAfter(format!("not numeric: {value:?}")))?;
    Ok(secs + margin_secs)
}
