//! Verse lookups behind `/bible/read`, served from local files or the remote
//! verse API depending on [`VerseSource`].
//!
//! Both sources produce the same [`VerseResponse`] envelope.

use std::sync::Arc;

use serde_json::Value;

use crate::{
    config::{AppConfig, VerseSource},
    error::{ProyektorError, Result},
    store::{BookDirectory, FlatFileVerseStore},
    types::{VerseObject, VerseResponse},
    upstream::RemoteVerseClient,
    utils, warning,
};

/// A validated `/read/{version}/{book}/{chapter}/{verse}[-{range}]` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassageRequest {
    pub version: String,
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub range: Option<String>,
}

impl PassageRequest {
    pub fn parse(version: &str, book: &str, chapter: &str, verse_spec: &str) -> Result<Self> {
        let version = utils::validate_segment(version, "versión")?;
        let book = utils::validate_segment(book, "libro")?;
        let chapter = utils::parse_positive(chapter, "capítulo")?;
        let (verse, range) = utils::parse_verse_spec(verse_spec)?;
        Ok(Self {
            version: version.to_string(),
            book: book.to_string(),
            chapter,
            verse,
            range,
        })
    }

    /// Last verse covered by the request, inclusive.
    pub fn last_verse(&self) -> u32 {
        self.range
            .as_deref()
            .and_then(|end| end.parse().ok())
            .unwrap_or(self.verse)
    }

    fn respond(&self, text: Vec<Value>) -> VerseResponse {
        VerseResponse {
            version: self.version.clone(),
            book: self.book.clone(),
            chapter: self.chapter,
            verse: self.verse,
            range: self.range.clone(),
            text,
        }
    }
}

#[derive(Debug, Clone)]
pub enum VerseBackend {
    Local {
        store: FlatFileVerseStore,
        books: Arc<BookDirectory>,
    },
    Remote(RemoteVerseClient),
}

impl VerseBackend {
    pub fn from_config(config: &AppConfig, books: Arc<BookDirectory>) -> Result<Self> {
        Ok(match config.verse_source {
            VerseSource::Local => Self::local(FlatFileVerseStore::new(&config.bibles_dir), books),
            VerseSource::Remote => Self::Remote(RemoteVerseClient::new(
                config.versions_url.clone(),
                config.upstream_timeout,
            )?),
        })
    }

    pub fn local(store: FlatFileVerseStore, books: Arc<BookDirectory>) -> Self {
        Self::Local { store, books }
    }

    pub fn source(&self) -> VerseSource {
        match self {
            VerseBackend::Local { .. } => VerseSource::Local,
            VerseBackend::Remote(_) => VerseSource::Remote,
        }
    }

    pub async fn read(&self, request: &PassageRequest) -> Result<VerseResponse> {
        let text = match self {
            VerseBackend::Local { store, books } => read_local(store, books, request).await?,
            VerseBackend::Remote(client) => read_remote(client, request).await?,
        };
        Ok(request.respond(text))
    }
}

async fn read_local(
    store: &FlatFileVerseStore,
    books: &BookDirectory,
    request: &PassageRequest,
) -> Result<Vec<Value>> {
    let book_number = u32::from(books.resolve(&request.book)?);
    let verses = store
        .load(&request.version, &request.book.to_lowercase())
        .await?;

    if verses.skipped_lines() > 0 {
        warning!(
            "Skipped {} malformed lines in {}/{}",
            verses.skipped_lines(),
            request.version,
            request.book
        );
    }

    // a range never runs past the last verse the chapter has; the start verse
    // is always answered, with the sentinel if it is absent
    let chapter_end = verses
        .last_verse_in(book_number, request.chapter)
        .unwrap_or(request.verse)
        .max(request.verse);
    let last = request.last_verse().min(chapter_end);

    Ok((request.verse..=last)
        .map(|number| {
            Value::from(VerseObject::local(
                number,
                verses.get(book_number, request.chapter, number),
            ))
        })
        .collect())
}

async fn read_remote(
    client: &RemoteVerseClient,
    request: &PassageRequest,
) -> Result<Vec<Value>> {
    let verses = client
        .fetch_verses(
            &request.version,
            &request.book,
            request.chapter,
            request.verse,
            request.range.as_deref(),
        )
        .await
        .map_err(|e| match e {
            ProyektorError::Upstream { status: 404, .. } => {
                ProyektorError::not_found("Versículo no encontrado.")
            }
            other => other,
        })?;

    if verses.is_empty() {
        return Err(ProyektorError::not_found("Versículo no encontrado."));
    }
    Ok(verses)
}
