//! Read-only local data: the book directory, verse files, song files and
//! the optional book mapping file.
//!
//! Every file is opened, read in full and closed within one call. No state is
//! kept between calls apart from the immutable [`BookDirectory`].

pub mod books;
pub mod mapping;
pub mod songs;
pub mod verses;

pub use books::BookDirectory;
pub use mapping::{BookMapping, load_book_mapping};
pub use songs::{SongLyricsStore, split_stanzas};
pub use verses::{FlatFileVerseStore, VERSE_NOT_FOUND, VerseStore};
