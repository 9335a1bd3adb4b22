//! Spotify Playlist Builder CLI Library
//!
//! This library turns an exported list of song titles into a private Spotify
//! playlist. Titles come from a tabular sheet or from a music-library XML
//! export; each title is resolved to a track through the Spotify search API
//! and the resolved tracks are added to a freshly created playlist in
//! bounded-size batches, with a fixed retry budget per batch.
//!
//! # Modules
//!
//! - `api` - HTTP API endpoints for the local callback server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `management` - Token persistence and refresh
//! - `pipeline` - Resolution, batching and submission orchestration
//! - `server` - Local HTTP server for OAuth callbacks
//! - `source` - Song-title extraction from sheet and library files
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use splcli::{cli, config};
//!
//! #[tokio::main]
//! async fn main() -> splcli::Res<()> {
//!     config::load_env().await?;
//!     // Dispatch to CLI functions...
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod management;
pub mod pipeline;
pub mod server;
pub mod source;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Uses a boxed dynamic error trait object so different error types can
/// travel through the same signatures while keeping Send + Sync bounds
/// for async contexts.
///
/// # Example
///
/// ```
/// use splcli::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Used for general progress and status updates throughout the
/// application.
///
/// # Example
///
/// ```
/// info!("Searching for songs on Spotify...");
/// info!("Found {} titles", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Used to provide positive feedback when an operation completes.
///
/// # Example
///
/// ```
/// success!("Playlist created");
/// success!("Added {} songs", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the process with exit code 1 right after printing, so it is
/// reserved for unrecoverable errors at the CLI boundary. Code placed after
/// an `error!` invocation will not execute.
///
/// # Example
///
/// ```
/// error!("Failed to load configuration");
/// error!("Missing required environment variable: {}", var_name);
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues the user should notice, like a song that
/// could not be found or a batch that ran out of retry attempts.
///
/// # Example
///
/// ```
/// warning!("Song '{}' not found on Spotify and will be skipped", title);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
