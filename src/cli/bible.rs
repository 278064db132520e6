use std::sync::Arc;

use serde_json::Value;
use tabled::Table;

use crate::{
    bible::{PassageRequest, VerseBackend},
    config::AppConfig,
    error,
    store::{BookDirectory, FlatFileVerseStore},
    types::{BookTableRow, VersionTableRow},
    upstream::RemoteVerseClient,
    utils,
};

pub fn books() {
    let rows: Vec<BookTableRow> = BookDirectory::new()
        .entries()
        .into_iter()
        .map(|b| BookTableRow {
            number: b.number,
            name: b.name,
        })
        .collect();
    println!("{}", Table::new(rows));
}

pub async fn versions(config: &AppConfig) {
    let client = match RemoteVerseClient::new(config.versions_url.clone(), config.upstream_timeout)
    {
        Ok(c) => c,
        Err(e) => error!("Cannot create verse client. Err: {}", e),
    };

    let pb = utils::spinner("Fetching Bible versions...");
    let result = client.fetch_bible_versions().await;
    pb.finish_and_clear();

    match result {
        Ok(response) => {
            let rows: Vec<VersionTableRow> = response
                .versions
                .into_iter()
                .map(|v| VersionTableRow {
                    id: v.id,
                    name: v.name,
                    version: v.version,
                    uri: v.uri,
                })
                .collect();
            println!("{}", Table::new(rows));
        }
        Err(e) => error!("No se pudieron obtener las versiones. Err: {}", e),
    }
}

/// Reads a passage. `local` forces the flat-file source regardless of
/// `VERSE_SOURCE`.
pub async fn read(
    config: &AppConfig,
    version: String,
    book: String,
    chapter: String,
    verse: String,
    local: bool,
) {
    let request = match PassageRequest::parse(&version, &book, &chapter, &verse) {
        Ok(r) => r,
        Err(e) => error!("{}", e),
    };

    let books = Arc::new(BookDirectory::new());
    let backend = if local {
        VerseBackend::local(FlatFileVerseStore::new(&config.bibles_dir), books)
    } else {
        match VerseBackend::from_config(config, books) {
            Ok(b) => b,
            Err(e) => error!("Cannot create verse source. Err: {}", e),
        }
    };

    let pb = utils::spinner("Reading verses...");
    let result = backend.read(&request).await;
    pb.finish_and_clear();

    match result {
        Ok(response) => {
            println!(
                "{} {} {}:{}",
                response.version,
                response.book,
                response.chapter,
                match &response.range {
                    Some(end) => format!("{}-{}", response.verse, end),
                    None => response.verse.to_string(),
                }
            );
            for verse in &response.text {
                println!("{:>4}  {}", verse_number(verse), verse_text(verse));
            }
        }
        Err(e) => error!("{}", e),
    }
}

fn verse_number(verse: &Value) -> String {
    verse
        .get("number")
        .map(|n| n.to_string())
        .unwrap_or_else(|| "-".to_string())
}

// remote sources use either key
fn verse_text(verse: &Value) -> &str {
    ["verse", "text"]
        .iter()
        .find_map(|key| verse.get(*key).and_then(Value::as_str))
        .unwrap_or_default()
}
