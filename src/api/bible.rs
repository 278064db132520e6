use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::{
    bible::PassageRequest,
    error::Result,
    server::AppState,
    store::{BookMapping, load_book_mapping},
    types::{BookEntry, VerseResponse, VersionsResponse},
};

pub async fn versions(State(state): State<AppState>) -> Result<Json<VersionsResponse>> {
    Ok(Json(state.versions.fetch_bible_versions().await?))
}

/// `{verse}` is either a single number or `{verse}-{range}`.
pub async fn read(
    State(state): State<AppState>,
    Path((version, book, chapter, verse)): Path<(String, String, String, String)>,
) -> Result<Json<VerseResponse>> {
    let request = PassageRequest::parse(&version, &book, &chapter, &verse)?;
    Ok(Json(state.verses.read(&request).await?))
}

pub async fn books(State(state): State<AppState>) -> Json<Vec<BookEntry>> {
    Json(state.books.entries())
}

pub async fn mapping(State(state): State<AppState>) -> Result<Json<BookMapping>> {
    Ok(Json(load_book_mapping(&state.config.bibles_dir).await?))
}
