//! # API Module
//!
//! HTTP handlers for the gateway. Each handler validates its path and query
//! input, calls exactly one component and returns either the JSON envelope or
//! a [`ProyektorError`](crate::error::ProyektorError), which renders itself as
//! `{"error": message}` with the matching status code.
//!
//! ## Endpoints
//!
//! ### Bible
//!
//! - [`bible::versions`] - `GET /bible/versions`
//! - [`bible::read`] - `GET /bible/read/{version}/{book}/{chapter}/{verse}[-{range}]`
//! - [`bible::books`] - `GET /bible/books`
//! - [`bible::mapping`] - `GET /bible/mapping`
//!
//! ### Songs
//!
//! - [`song::local_song`] - `GET /song/{category}/{song_name}`
//! - [`song::remote_song`] - `GET /song/{category}/{artist}/{song_name}`
//!
//! ### Lyrics index
//!
//! - [`lyrics::search`] - `GET /lyrics/search`
//! - [`lyrics::by_id`] - `GET /lyrics/get/{id}`
//! - [`lyrics::by_details`] - `GET /lyrics/get`
//!
//! ### Monitoring
//!
//! - [`health`] - `GET /health`

pub mod bible;
mod error;
mod health;
pub mod lyrics;
pub mod song;

pub use health::health;
