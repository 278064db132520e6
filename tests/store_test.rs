use std::fs;
use std::path::Path;

use proyektor::ProyektorError;
use proyektor::store::{
    FlatFileVerseStore, SongLyricsStore, VERSE_NOT_FOUND, VerseStore, load_book_mapping,
    split_stanzas,
};
use tempfile::TempDir;

const GENESIS: &str = "\
(1, 1, 1, 'En el principio creó Dios los cielos y la tierra.')
(1, 1, 2, 'Y la tierra estaba desordenada y vacía,')
(1, 1, 3, 'Y dijo Dios: Sea la luz; y fue la luz.')
esto no es un versículo
(1, 2, 1, 'Fueron, pues, acabados los cielos y la tierra,')
";

// Helper function to write a file, creating parent directories
fn write_file(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

#[tokio::test]
async fn test_load_then_get_returns_line_text() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "rv1960/genesis.txt", GENESIS);

    let store = FlatFileVerseStore::new(dir.path());
    let verses = store.load("rv1960", "genesis").await.unwrap();

    assert_eq!(
        verses.get(1, 1, 1),
        "En el principio creó Dios los cielos y la tierra."
    );
    assert_eq!(
        verses.get(1, 1, 3),
        "Y dijo Dios: Sea la luz; y fue la luz."
    );
    assert_eq!(
        verses.get(1, 2, 1),
        "Fueron, pues, acabados los cielos y la tierra,"
    );
    assert_eq!(verses.parsed_lines(), 4);
    assert_eq!(verses.skipped_lines(), 1);
}

#[tokio::test]
async fn test_missing_verse_is_data_not_error() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "rv1960/genesis.txt", GENESIS);

    let verses = FlatFileVerseStore::new(dir.path())
        .load("rv1960", "genesis")
        .await
        .unwrap();

    assert_eq!(verses.get(1, 1, 99), VERSE_NOT_FOUND);
    assert_eq!(verses.get(1, 50, 1), VERSE_NOT_FOUND);
    assert_eq!(verses.get(2, 1, 1), VERSE_NOT_FOUND);
    assert!(!verses.contains(1, 3, 1));
}

#[tokio::test]
async fn test_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "rv1960/genesis.txt", GENESIS);
    let store = FlatFileVerseStore::new(dir.path());

    for (version, book) in [("rv1960", "exodo"), ("nvi", "genesis")] {
        match store.load(version, book).await {
            Err(ProyektorError::NotFound(message)) => {
                assert_eq!(message, "Versión o libro no encontrados.")
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }
}

#[tokio::test]
async fn test_load_rejects_traversal_segments() {
    let dir = TempDir::new().unwrap();
    let store = FlatFileVerseStore::new(dir.path().join("bibles"));
    let result = store.load("..", "secret").await;
    assert!(matches!(result, Err(ProyektorError::Validation(_))));
}

#[test]
fn test_parse_only_malformed_content() {
    let store = VerseStore::parse("nada\n(1, 1)\n(a, b, c, 'd')\n");
    assert_eq!(store.parsed_lines(), 0);
    assert_eq!(store.skipped_lines(), 3);
    assert_eq!(store.get(1, 1, 1), VERSE_NOT_FOUND);
}

#[test]
fn test_verse_text_runs_to_the_last_closing_quote() {
    let store = VerseStore::parse("(19, 23, 1, 'Jehová es mi pastor; nada me faltará.')");
    assert_eq!(store.get(19, 23, 1), "Jehová es mi pastor; nada me faltará.");

    let store = VerseStore::parse("(1, 1, 1, 'dijo: 'Sea la luz'')");
    assert_eq!(store.get(1, 1, 1), "dijo: 'Sea la luz'");
}

#[test]
fn test_parse_counts_skipped_lines_but_not_blank_ones() {
    let content = "(1, 1, 1, 'a')\n\n-- comment\n(1, x, 2, 'b')\n(1, 1, 99999999999, 'c')\n";
    let store = VerseStore::parse(content);
    assert_eq!(store.parsed_lines(), 1);
    assert_eq!(store.skipped_lines(), 3);
}

#[test]
fn test_parse_trims_lines_before_matching() {
    let store = VerseStore::parse("   (1, 2, 3, 'texto')   \r\n");
    assert!(store.contains(1, 2, 3));
    assert_eq!(store.get(1, 2, 3), "texto");
}

#[test]
fn test_last_verse_in_chapter() {
    let store = VerseStore::parse(GENESIS);
    assert_eq!(store.last_verse_in(1, 1), Some(3));
    assert_eq!(store.last_verse_in(1, 2), Some(1));
    assert_eq!(store.last_verse_in(1, 3), None);
    assert_eq!(store.last_verse_in(2, 1), None);

    // gaps do not matter, the highest number wins
    let store = VerseStore::parse("(1, 1, 9, 'nueve')\n(1, 1, 2, 'dos')\n");
    assert_eq!(store.last_verse_in(1, 1), Some(9));
}

#[test]
fn test_split_stanzas() {
    assert_eq!(split_stanzas("A\n\nB\n\nC"), vec!["A", "B", "C"]);

    // no blank line -> one stanza equal to the trimmed content
    assert_eq!(
        split_stanzas("\n  Primera linea\nSegunda linea  \n"),
        vec!["Primera linea\nSegunda linea"]
    );
}

#[tokio::test]
async fn test_load_song_stanzas() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "lentas/dios-esta-aqui.txt",
        "Dios está aquí\ntan cierto como el aire\n\nQue respiro\n\nCoro\n",
    );

    let store = SongLyricsStore::new(dir.path());
    let lyrics = store.load("lentas", "dios-esta-aqui").await.unwrap();
    assert_eq!(
        lyrics,
        vec![
            "Dios está aquí\ntan cierto como el aire",
            "Que respiro",
            "Coro"
        ]
    );
}

#[tokio::test]
async fn test_both_categories_are_accepted() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "lentas/a.txt", "lenta");
    write_file(dir.path(), "rapidas/b.txt", "rapida");

    let store = SongLyricsStore::new(dir.path());
    assert_eq!(store.load("lentas", "a").await.unwrap(), vec!["lenta"]);
    assert_eq!(store.load("rapidas", "b").await.unwrap(), vec!["rapida"]);
}

#[tokio::test]
async fn test_invalid_category_is_rejected_before_file_access() {
    // songs dir does not even exist, the category check must come first
    let store = SongLyricsStore::new("/definitely/not/here");
    for category in ["metal", "Lentas", "RAPIDAS", "", "lentas "] {
        let result = store.load(category, "cualquiera").await;
        assert!(
            matches!(result, Err(ProyektorError::Validation(_))),
            "category {:?} should be rejected",
            category
        );
    }
}

#[tokio::test]
async fn test_missing_song_is_not_found() {
    let dir = TempDir::new().unwrap();
    let store = SongLyricsStore::new(dir.path());
    let result = store.load("rapidas", "no-existe").await;
    assert!(matches!(result, Err(ProyektorError::NotFound(_))));
}

#[tokio::test]
async fn test_load_book_mapping() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "bibles.json",
        r#"{"genesis": 1, "exodo": {"id": 2, "chapters": 40}}"#,
    );

    let mapping = load_book_mapping(dir.path()).await.unwrap();
    assert_eq!(mapping.len(), 2);
    assert_eq!(mapping["genesis"], serde_json::json!(1));
    assert_eq!(mapping["exodo"]["chapters"], serde_json::json!(40));
}

#[tokio::test]
async fn test_book_mapping_failures_are_config_errors() {
    let dir = TempDir::new().unwrap();
    let missing = load_book_mapping(dir.path()).await;
    assert!(matches!(missing, Err(ProyektorError::Config(_))));

    write_file(dir.path(), "bibles.json", "{ not json");
    let malformed = load_book_mapping(dir.path()).await;
    assert!(matches!(malformed, Err(ProyektorError::Config(_))));
}

#[test]
fn test_split_stanzas_keeps_stanza_interiors() {
    let stanzas = split_stanzas("  Linea uno\n  Linea dos\n\nCoro  \n");
    assert_eq!(stanzas, vec!["Linea uno\n  Linea dos", "Coro"]);
}

#[test]
fn test_split_stanzas_normalizes_windows_line_endings() {
    assert_eq!(split_stanzas("A\r\n\r\nB\r\nB2"), vec!["A", "B\nB2"]);
}

#[test]
fn test_split_stanzas_empty_text_has_no_stanzas() {
    assert!(split_stanzas("").is_empty());
    assert!(split_stanzas("\n\n  \n").is_empty());
}
