use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::{
    error::{ProyektorError, Result},
    server::AppState,
    types::{Category, LyricsQuery, RemoteSongResponse, SongResponse},
};

pub async fn local_song(
    State(state): State<AppState>,
    Path((category, song_name)): Path<(String, String)>,
) -> Result<Json<SongResponse>> {
    // category first: a bad category never reaches the filesystem
    let category: Category = category.parse()?;
    let lyrics = state.songs.load_in(category, &song_name).await?;
    Ok(Json(SongResponse {
        song_name,
        category,
        lyrics,
    }))
}

pub async fn remote_song(
    State(state): State<AppState>,
    Path((category, artist, song_name)): Path<(String, String, String)>,
) -> Result<Json<RemoteSongResponse>> {
    let category: Category = category.parse()?;
    let query = LyricsQuery {
        track_name: Some(song_name.clone()),
        artist_name: Some(artist.clone()),
        ..Default::default()
    };

    let track = state
        .lyrics
        .find_first(&query)
        .await?
        .ok_or_else(|| ProyektorError::not_found("Canción no encontrada."))?;

    Ok(Json(RemoteSongResponse {
        song_name,
        artist,
        category,
        lyrics: track.plain_lyrics.unwrap_or_default(),
    }))
}
