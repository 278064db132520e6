//! # Upstream Integration Module
//!
//! Clients for the two remote services the gateway re-exposes:
//!
//! - [`verses`] - the Bible verse API (`/versions`, `/read/...`)
//! - [`lyrics`] - the LRCLIB lyrics index (`/search`, `/get`, `/get/{id}`)
//!
//! Each client owns one `reqwest::Client` built with a bounded timeout and is
//! cheap to clone. Calls are single request/response translations: no retries,
//! no caching. A non-success status becomes [`ProyektorError::Upstream`], a
//! body that does not decode becomes [`ProyektorError::UnexpectedFormat`] and a
//! connection failure or timeout becomes [`ProyektorError::Transport`].

pub mod lyrics;
pub mod verses;

pub use lyrics::RemoteLyricsClient;
pub use verses::RemoteVerseClient;

use std::time::Duration;

use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use crate::error::{ProyektorError, Result};

pub(crate) fn build_client(timeout: Duration) -> Result<Client> {
    Ok(Client::builder()
        .timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

/// Joins `segments` onto `base_url`, percent-encoding each one.
pub(crate) fn join_url<I>(base_url: &str, segments: I) -> Result<Url>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut url = Url::parse(base_url).map_err(|e| {
        ProyektorError::config(format!("Invalid upstream URL '{}': {}", base_url, e))
    })?;
    url.path_segments_mut()
        .map_err(|_| ProyektorError::config(format!("Invalid upstream URL '{}'", base_url)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

pub(crate) fn upstream_error(response: &Response) -> ProyektorError {
    let status = response.status();
    ProyektorError::Upstream {
        status: status.as_u16(),
        message: status
            .canonical_reason()
            .unwrap_or("unknown status")
            .to_string(),
    }
}

/// Decodes a successful response body as `T`.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ProyektorError::UnexpectedFormat(e.to_string()))
}
