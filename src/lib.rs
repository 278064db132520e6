//! Proyektor Gateway Library
//!
//! This library re-exposes two unrelated data sources, Bible verse text and
//! song lyrics, under one REST interface. Each source can be read from local
//! flat files or from a remote API; every request is a single translation
//! from path parameters to at most one file read or one outbound call.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the gateway routes
//! - `bible` - verse lookups over the local or remote source
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy and HTTP status mapping
//! - `server` - Router construction and the HTTP server
//! - `store` - Local book directory, verse files and song files
//! - `types` - Data structures and response envelopes
//! - `upstream` - Clients for the remote verse and lyrics services
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use proyektor::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> proyektor::Res<()> {
//!     config::load_env().await?;
//!     let state = server::AppState::from_config(config::AppConfig::from_env()?)?;
//!     server::start_api_server(state).await
//! }
//! ```

pub mod api;
pub mod bible;
pub mod cli;
pub mod config;
pub mod error;
pub mod server;
pub mod store;
pub mod types;
pub mod upstream;
pub mod utils;

pub use error::ProyektorError;

/// A convenient Result type alias for top-level operations that may fail.
///
/// Uses a boxed dynamic error trait object so start-up code can mix
/// configuration, io and server errors with `?`. Component code returns the
/// typed [`error::Result`] instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark to stderr and exits
/// the program.
///
/// Only for unrecoverable start-up and CLI failures. Request handlers never
/// call this; they return a [`ProyektorError`] instead.
///
/// # Example
///
/// ```
/// error!("Failed to load configuration");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark to stderr.
///
/// Used for recoverable problems: skipped malformed lines, upstream failures
/// turned into error responses.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
