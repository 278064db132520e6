use axum::{
    extract::{Path, Query, State},
    response::Json,
};

use crate::{
    error::{ProyektorError, Result},
    server::AppState,
    types::{LyricsQuery, TrackDetail, TrackDetailsQuery, TrackSummary},
    utils,
};

pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<LyricsQuery>,
) -> Result<Json<Vec<TrackSummary>>> {
    Ok(Json(state.lyrics.search(&query).await?))
}

pub async fn by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TrackDetail>> {
    let id = utils::parse_track_id(&id)?;
    state
        .lyrics
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ProyektorError::not_found("Track not found"))
}

pub async fn by_details(
    State(state): State<AppState>,
    Query(query): Query<TrackDetailsQuery>,
) -> Result<Json<TrackDetail>> {
    let track_name = required(query.track_name.as_deref(), "track_name")?;
    let artist_name = required(query.artist_name.as_deref(), "artist_name")?;

    state
        .lyrics
        .get_by_details(
            track_name,
            artist_name,
            query.album_name.as_deref(),
            query.duration,
        )
        .await?
        .map(Json)
        .ok_or_else(|| ProyektorError::not_found("Track not found"))
}

fn required<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ProyektorError::validation(format!(
            "Falta el parámetro '{}'.",
            field
        ))),
    }
}
