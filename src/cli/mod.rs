//! # CLI Module
//!
//! Command-line front end to every gateway component. Each command builds the
//! one component it needs from the shared [`AppConfig`](crate::config::AppConfig),
//! runs a single lookup and prints the result, so data files and upstream
//! services can be checked without starting the server.
//!
//! ## Commands
//!
//! - [`serve`] - start the HTTP gateway
//! - [`books`] - list the book directory
//! - [`versions`] - list remote Bible versions
//! - [`read`] - read a verse or range, locally or remotely
//! - [`song`] - print a local song stanza by stanza
//! - [`lyrics_search`], [`lyrics_get`], [`lyrics_find`] - query the lyrics index
//!
//! Failures are reported with the `error!` macro and end the process.

mod bible;
mod serve;
mod songs;

pub use bible::books;
pub use bible::read;
pub use bible::versions;
pub use serve::serve;
pub use songs::lyrics_find;
pub use songs::lyrics_get;
pub use songs::lyrics_search;
pub use songs::song;
