use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tabled::Tabled;

use crate::error::ProyektorError;

/// One verse read from a local book file.
///
/// Remote verses are not decoded into this type; their JSON objects are
/// served as upstream sent them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerseObject {
    pub number: u32,
    pub verse: String,
}

impl VerseObject {
    pub fn local(number: u32, text: impl Into<String>) -> Self {
        VerseObject {
            number,
            verse: text.into(),
        }
    }
}

impl From<VerseObject> for Value {
    fn from(verse: VerseObject) -> Self {
        json!({ "number": verse.number, "verse": verse.verse })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerseResponse {
    pub version: String,
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub range: Option<String>,
    pub text: Vec<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamVersion {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BibleVersion {
    pub id: usize,
    pub name: String,
    pub version: String,
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionsResponse {
    pub versions: Vec<BibleVersion>,
    pub endpoints: Vec<String>,
}

#[derive(Tabled)]
pub struct VersionTableRow {
    pub id: usize,
    pub name: String,
    pub version: String,
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookEntry {
    pub number: u8,
    pub name: String,
}

#[derive(Tabled)]
pub struct BookTableRow {
    pub number: u8,
    pub name: String,
}

/// The two song categories available on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Lentas,
    Rapidas,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Lentas => "lentas",
            Category::Rapidas => "rapidas",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ProyektorError;

    // exact match only, "Lentas" is not a category
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lentas" => Ok(Category::Lentas),
            "rapidas" => Ok(Category::Rapidas),
            _ => Err(ProyektorError::validation(
                "Categoría no válida. Use 'lentas' o 'rapidas'.",
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongResponse {
    pub song_name: String,
    pub category: Category,
    pub lyrics: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteSongResponse {
    pub song_name: String,
    pub artist: String,
    pub category: Category,
    pub lyrics: String,
}

/// A search hit from the lyrics index. Does not carry the lyric text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackSummary {
    pub id: u64,
    pub track_name: String,
    pub artist_name: String,
    #[serde(default)]
    pub album_name: Option<String>,
    #[serde(default)]
    pub duration: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackDetail {
    pub id: u64,
    pub track_name: String,
    pub artist_name: String,
    #[serde(default)]
    pub album_name: Option<String>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub instrumental: bool,
    #[serde(default)]
    pub plain_lyrics: Option<String>,
    #[serde(default)]
    pub synced_lyrics: Option<String>,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub id: u64,
    pub track: String,
    pub artist: String,
    pub album: String,
}

impl From<&TrackSummary> for TrackTableRow {
    fn from(track: &TrackSummary) -> Self {
        TrackTableRow {
            id: track.id,
            track: track.track_name.clone(),
            artist: track.artist_name.clone(),
            album: track.album_name.clone().unwrap_or_default(),
        }
    }
}

/// Filters for a lyrics search. Empty fields are not sent upstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LyricsQuery {
    #[serde(default, rename = "q")]
    pub query: Option<String>,
    #[serde(default)]
    pub track_name: Option<String>,
    #[serde(default)]
    pub artist_name: Option<String>,
    #[serde(default)]
    pub album_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackDetailsQuery {
    #[serde(default)]
    pub track_name: Option<String>,
    #[serde(default)]
    pub artist_name: Option<String>,
    #[serde(default)]
    pub album_name: Option<String>,
    #[serde(default)]
    pub duration: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub started_at: DateTime<Utc>,
}
