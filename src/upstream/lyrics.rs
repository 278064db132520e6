use std::time::Duration;

use reqwest::{Client, StatusCode};

use super::{build_client, join_url, read_json, upstream_error};
use crate::{
    error::Result,
    types::{LyricsQuery, TrackDetail, TrackSummary},
};

/// Client for the LRCLIB lyrics index.
///
/// Search results carry no lyric text, so full lyrics always take a second
/// request by id.
#[derive(Debug, Clone)]
pub struct RemoteLyricsClient {
    client: Client,
    base_url: String,
}

impl RemoteLyricsClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: base_url.into(),
        })
    }

    /// Keyword or field search. Filters are forwarded as given; an empty query
    /// is sent as-is and judged by upstream.
    pub async fn search(&self, query: &LyricsQuery) -> Result<Vec<TrackSummary>> {
        let url = join_url(&self.base_url, ["search"])?;
        let params = search_params(query);
        let response = self.client.get(url).query(&params).send().await?;
        if !response.status().is_success() {
            return Err(upstream_error(&response));
        }
        read_json(response).await
    }

    /// Full track by LRCLIB id. `Ok(None)` when upstream has no such track.
    pub async fn get_by_id(&self, id: u64) -> Result<Option<TrackDetail>> {
        let url = join_url(&self.base_url, ["get".to_string(), id.to_string()])?;
        let response = self.client.get(url).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(read_json(response).await?)),
            _ => Err(upstream_error(&response)),
        }
    }

    /// Full track by its signature. `Ok(None)` when upstream has no match.
    pub async fn get_by_details(
        &self,
        track_name: &str,
        artist_name: &str,
        album_name: Option<&str>,
        duration: Option<u32>,
    ) -> Result<Option<TrackDetail>> {
        let url = join_url(&self.base_url, ["get"])?;
        let mut params = vec![
            ("track_name", track_name.to_string()),
            ("artist_name", artist_name.to_string()),
        ];
        if let Some(album) = album_name {
            params.push(("album_name", album.to_string()));
        }
        if let Some(duration) = duration {
            params.push(("duration", duration.to_string()));
        }

        let response = self.client.get(url).query(&params).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(read_json(response).await?)),
            _ => Err(upstream_error(&response)),
        }
    }

    /// Searches, then fetches the first hit by id.
    ///
    /// First result wins: upstream order is taken as-is, with no scoring and
    /// no disambiguation between several candidates.
    pub async fn find_first(&self, query: &LyricsQuery) -> Result<Option<TrackDetail>> {
        let results = self.search(query).await?;
        match results.first() {
            Some(track) => self.get_by_id(track.id).await,
            None => Ok(None),
        }
    }
}

fn search_params(query: &LyricsQuery) -> Vec<(&'static str, &str)> {
    [
        ("q", &query.query),
        ("track_name", &query.track_name),
        ("artist_name", &query.artist_name),
        ("album_name", &query.album_name),
    ]
    .into_iter()
    .filter_map(|(key, value)| match value.as_deref() {
        Some(v) if !v.is_empty() => Some((key, v)),
        _ => None,
    })
    .collect()
}
