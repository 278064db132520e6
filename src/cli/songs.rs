use tabled::Table;

use crate::{
    config::AppConfig,
    error,
    store::SongLyricsStore,
    types::{LyricsQuery, TrackDetail, TrackTableRow},
    upstream::RemoteLyricsClient,
    utils, warning,
};

pub async fn song(config: &AppConfig, category: String, name: String) {
    let store = SongLyricsStore::new(&config.songs_dir);
    match store.load(&category, &name).await {
        Ok(stanzas) => {
            for (idx, stanza) in stanzas.iter().enumerate() {
                if idx > 0 {
                    println!();
                }
                println!("{}", stanza);
            }
        }
        Err(e) => error!("{}", e),
    }
}

fn lyrics_client(config: &AppConfig) -> RemoteLyricsClient {
    match RemoteLyricsClient::new(config.lyrics_url.clone(), config.upstream_timeout) {
        Ok(c) => c,
        Err(e) => error!("Cannot create lyrics client. Err: {}", e),
    }
}

pub async fn lyrics_search(config: &AppConfig, query: LyricsQuery) {
    let client = lyrics_client(config);

    let pb = utils::spinner("Searching lyrics...");
    let result = client.search(&query).await;
    pb.finish_and_clear();

    match result {
        Ok(tracks) if tracks.is_empty() => warning!("No tracks matched the search."),
        Ok(tracks) => {
            let rows: Vec<TrackTableRow> = tracks.iter().map(TrackTableRow::from).collect();
            println!("{}", Table::new(rows));
        }
        Err(e) => error!("Search failed. Err: {}", e),
    }
}

pub async fn lyrics_get(config: &AppConfig, id: u64) {
    let client = lyrics_client(config);

    let pb = utils::spinner("Fetching lyrics...");
    let result = client.get_by_id(id).await;
    pb.finish_and_clear();

    print_track(result, &format!("No track with id {}.", id));
}

pub async fn lyrics_find(
    config: &AppConfig,
    track: String,
    artist: String,
    album: Option<String>,
    duration: Option<u32>,
) {
    let client = lyrics_client(config);

    let pb = utils::spinner("Fetching lyrics...");
    let result = client
        .get_by_details(&track, &artist, album.as_deref(), duration)
        .await;
    pb.finish_and_clear();

    print_track(result, &format!("No track '{}' by '{}'.", track, artist));
}

fn print_track(result: crate::error::Result<Option<TrackDetail>>, not_found: &str) {
    match result {
        Ok(Some(track)) => {
            println!("{} - {}", track.artist_name, track.track_name);
            if let Some(album) = &track.album_name {
                println!("{}", album);
            }
            println!();
            match track.plain_lyrics {
                Some(lyrics) => println!("{}", lyrics),
                None if track.instrumental => println!("(instrumental)"),
                None => warning!("Track has no plain lyrics."),
            }
        }
        Ok(None) => error!("{}", not_found),
        Err(e) => error!("Lyrics request failed. Err: {}", e),
    }
}
