use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use super::{build_client, join_url, read_json, upstream_error};
use crate::{
    error::{ProyektorError, Result},
    types::{BibleVersion, UpstreamVersion, VersionsResponse},
    utils,
};

/// Client for the remote Bible verse API.
#[derive(Debug, Clone)]
pub struct RemoteVerseClient {
    client: Client,
    base_url: String,
}

impl RemoteVerseClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: base_url.into(),
        })
    }

    /// `{base}/read/{version}/{book}/{chapter}/{verse}`, with `-{range}`
    /// appended to the verse when a range end is given.
    pub fn verses_url(
        &self,
        version: &str,
        book: &str,
        chapter: u32,
        verse: u32,
        range: Option<&str>,
    ) -> Result<String> {
        let verse_segment = match range {
            Some(end) => format!("{}-{}", verse, end),
            None => verse.to_string(),
        };
        let chapter = chapter.to_string();
        let url = join_url(
            &self.base_url,
            [
                "read",
                version,
                book,
                chapter.as_str(),
                verse_segment.as_str(),
            ],
        )?;
        Ok(url.into())
    }

    /// Fetches one verse or a range of verses.
    ///
    /// A single object is wrapped in a one-element vector, an array is passed
    /// through in upstream order. The objects themselves are not reshaped.
    pub async fn fetch_verses(
        &self,
        version: &str,
        book: &str,
        chapter: u32,
        verse: u32,
        range: Option<&str>,
    ) -> Result<Vec<Value>> {
        let url = self.verses_url(version, book, chapter, verse, range)?;
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(upstream_error(&response));
        }

        let body: Value = read_json(response).await?;
        normalize_verses(body)
    }

    /// Lists upstream versions with synthesized ids, slugs and URIs.
    ///
    /// The ids are positions in the upstream list and change if upstream
    /// reorders it. Do not persist them; `version` is the stable key.
    pub async fn fetch_bible_versions(&self) -> Result<VersionsResponse> {
        let url = join_url(&self.base_url, ["versions"])?;
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(upstream_error(&response));
        }

        let raw: Vec<UpstreamVersion> = read_json(response).await?;
        if raw.is_empty() {
            return Err(ProyektorError::UnexpectedFormat(
                "No se pudieron obtener las versiones".to_string(),
            ));
        }
        Ok(synthesize_versions(&raw))
    }
}

/// Turns any upstream verse payload into a sequence of verse objects.
///
/// Only the shape is checked: every element must be a JSON object. Keys are
/// left as upstream sent them, so `text` stays `text` and unknown fields
/// survive.
pub fn normalize_verses(body: Value) -> Result<Vec<Value>> {
    match body {
        Value::Array(items) => {
            if let Some(bad) = items.iter().find(|item| !item.is_object()) {
                return Err(unexpected_shape("a verse object", bad));
            }
            Ok(items)
        }
        Value::Object(_) => Ok(vec![body]),
        other => Err(unexpected_shape("a verse object or array", &other)),
    }
}

fn unexpected_shape(expected: &str, got: &Value) -> ProyektorError {
    ProyektorError::UnexpectedFormat(format!("expected {}, got {}", expected, json_kind(got)))
}

pub fn synthesize_versions(raw: &[UpstreamVersion]) -> VersionsResponse {
    let mut versions = Vec::with_capacity(raw.len());
    let mut endpoints = Vec::with_capacity(raw.len());

    for (idx, upstream) in raw.iter().enumerate() {
        let slug = utils::version_slug(&upstream.name);
        let uri = format!("/api/read/{}", slug);
        endpoints.push(format!("{}/genesis/1", uri));
        versions.push(BibleVersion {
            id: idx + 1,
            name: upstream.name.clone(),
            version: slug,
            uri,
        });
    }

    VersionsResponse {
        versions,
        endpoints,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
