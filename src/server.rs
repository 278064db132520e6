use std::sync::Arc;

use axum::{Router, routing::get};
use chrono::{DateTime, Utc};

use crate::{
    Res, api,
    bible::VerseBackend,
    config::AppConfig,
    error::Result,
    info,
    store::{BookDirectory, SongLyricsStore},
    upstream::{RemoteLyricsClient, RemoteVerseClient},
};

/// Everything a handler may touch. Built once, cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub books: Arc<BookDirectory>,
    pub verses: VerseBackend,
    pub versions: RemoteVerseClient,
    pub songs: SongLyricsStore,
    pub lyrics: RemoteLyricsClient,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn from_config(config: AppConfig) -> Result<Self> {
        let books = Arc::new(BookDirectory::new());
        Ok(Self {
            verses: VerseBackend::from_config(&config, Arc::clone(&books))?,
            versions: RemoteVerseClient::new(config.versions_url.clone(), config.upstream_timeout)?,
            songs: SongLyricsStore::new(&config.songs_dir),
            lyrics: RemoteLyricsClient::new(config.lyrics_url.clone(), config.upstream_timeout)?,
            books,
            config: Arc::new(config),
            started_at: Utc::now(),
        })
    }
}

pub fn make_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/bible/versions", get(api::bible::versions))
        .route("/bible/books", get(api::bible::books))
        .route("/bible/mapping", get(api::bible::mapping))
        .route(
            "/bible/read/{version}/{book}/{chapter}/{verse}",
            get(api::bible::read),
        )
        .route("/song/{category}/{song_name}", get(api::song::local_song))
        .route(
            "/song/{category}/{artist}/{song_name}",
            get(api::song::remote_song),
        )
        .route("/lyrics/search", get(api::lyrics::search))
        .route("/lyrics/get", get(api::lyrics::by_details))
        .route("/lyrics/get/{id}", get(api::lyrics::by_id))
        .with_state(state)
}

pub async fn start_api_server(state: AppState) -> Res<()> {
    let addr = state.config.server_addr;
    let source = state.verses.source();
    let app = make_app(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{} (verses from {:?} source)", addr, source);
    axum::serve(listener, app).await?;
    Ok(())
}
