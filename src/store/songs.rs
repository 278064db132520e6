use std::{io::ErrorKind, path::PathBuf};

use crate::{
    error::{ProyektorError, Result},
    types::Category,
    utils,
};

/// Splits song text into stanzas on blank lines.
///
/// `\r\n` is normalised to `\n` and the whole text is trimmed once; stanzas
/// themselves keep their inner whitespace. Text that is empty after trimming
/// has no stanzas.
pub fn split_stanzas(content: &str) -> Vec<String> {
    let normalized = content.replace("\r\n", "\n");
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split("\n\n").map(str::to_string).collect()
}

/// Reads `{songs_dir}/{category}/{song_name}.txt` files.
#[derive(Debug, Clone)]
pub struct SongLyricsStore {
    songs_dir: PathBuf,
}

impl SongLyricsStore {
    pub fn new(songs_dir: impl Into<PathBuf>) -> Self {
        Self {
            songs_dir: songs_dir.into(),
        }
    }

    /// Loads a song as stanzas.
    ///
    /// The category is validated before the filesystem is touched, so an
    /// invalid category is always a [`ProyektorError::Validation`] even when
    /// no such directory exists.
    pub async fn load(&self, category: &str, song_name: &str) -> Result<Vec<String>> {
        let category: Category = category.parse()?;
        self.load_in(category, song_name).await
    }

    pub async fn load_in(&self, category: Category, song_name: &str) -> Result<Vec<String>> {
        let song_name = utils::validate_segment(song_name, "canción")?;
        let path = self
            .songs_dir
            .join(category.as_str())
            .join(format!("{}.txt", song_name));

        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => ProyektorError::not_found("Canción no encontrada."),
                _ => ProyektorError::Io(e),
            })?;

        Ok(split_stanzas(&content))
    }
}
