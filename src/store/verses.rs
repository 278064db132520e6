use std::{
    collections::HashMap,
    io::ErrorKind,
    path::PathBuf,
    sync::LazyLock,
};

use regex::Regex;

use crate::{
    error::{ProyektorError, Result},
    utils,
};

/// Text returned for a verse that is absent from an existing book file.
pub const VERSE_NOT_FOUND: &str = "Versículo no encontrado.";

// `(book, chapter, verse, 'text')`; not anchored at the end, the text runs to the last `')`
static VERSE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\((\d+), (\d+), (\d+), '(.*)'\)").expect("verse line pattern is valid")
});

type Chapters = HashMap<u32, HashMap<u32, String>>;

/// Verses of one version/book file, indexed book -> chapter -> verse.
///
/// Lives for a single lookup; nothing is cached between requests.
#[derive(Debug, Default, Clone)]
pub struct VerseStore {
    books: HashMap<u32, Chapters>,
    parsed_lines: usize,
    skipped_lines: usize,
}

impl VerseStore {
    /// Parses the tuple-per-line verse format.
    ///
    /// Lenient: lines that do not match, including those whose numbers do not
    /// fit a `u32`, are skipped and counted. Blank lines are ignored without
    /// being counted.
    pub fn parse(content: &str) -> Self {
        let mut store = VerseStore::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match parse_line(line) {
                Some((book, chapter, verse, text)) => {
                    store
                        .books
                        .entry(book)
                        .or_default()
                        .entry(chapter)
                        .or_default()
                        .insert(verse, text.to_string());
                    store.parsed_lines += 1;
                }
                None => store.skipped_lines += 1,
            }
        }

        store
    }

    /// Verse text, or [`VERSE_NOT_FOUND`] when the combination is absent.
    pub fn get(&self, book_number: u32, chapter: u32, verse: u32) -> &str {
        self.books
            .get(&book_number)
            .and_then(|chapters| chapters.get(&chapter))
            .and_then(|verses| verses.get(&verse))
            .map(String::as_str)
            .unwrap_or(VERSE_NOT_FOUND)
    }

    /// Highest verse number present in a chapter, `None` for an absent chapter.
    pub fn last_verse_in(&self, book_number: u32, chapter: u32) -> Option<u32> {
        self.books
            .get(&book_number)
            .and_then(|chapters| chapters.get(&chapter))
            .and_then(|verses| verses.keys().max().copied())
    }

    pub fn contains(&self, book_number: u32, chapter: u32, verse: u32) -> bool {
        self.get(book_number, chapter, verse) != VERSE_NOT_FOUND
    }

    pub fn parsed_lines(&self) -> usize {
        self.parsed_lines
    }

    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }
}

fn parse_line(line: &str) -> Option<(u32, u32, u32, &str)> {
    let caps = VERSE_LINE.captures(line)?;
    let book = caps.get(1)?.as_str().parse().ok()?;
    let chapter = caps.get(2)?.as_str().parse().ok()?;
    let verse = caps.get(3)?.as_str().parse().ok()?;
    let text = caps.get(4)?.as_str();
    Some((book, chapter, verse, text))
}

/// Reads `{bibles_dir}/{version}/{book}.txt` files.
#[derive(Debug, Clone)]
pub struct FlatFileVerseStore {
    bibles_dir: PathBuf,
}

impl FlatFileVerseStore {
    pub fn new(bibles_dir: impl Into<PathBuf>) -> Self {
        Self {
            bibles_dir: bibles_dir.into(),
        }
    }

    /// Loads and parses one version/book file.
    ///
    /// A missing file is [`ProyektorError::NotFound`]; the file handle is
    /// closed before this returns.
    pub async fn load(&self, version: &str, book: &str) -> Result<VerseStore> {
        let version = utils::validate_segment(version, "versión")?;
        let book = utils::validate_segment(book, "libro")?;
        let path = self.bibles_dir.join(version).join(format!("{}.txt", book));

        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => {
                    ProyektorError::not_found("Versión o libro no encontrados.")
                }
                _ => ProyektorError::Io(e),
            })?;

        Ok(VerseStore::parse(&content))
    }
}
