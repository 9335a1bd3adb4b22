//! # CLI Module
//!
//! The command-line interface layer for splcli, a Spotify API client that
//! builds playlists from exported song lists. Each subcommand of the binary
//! lives here as one async function that coordinates the source readers, the
//! pipeline and the Spotify integration, and translates their outcomes into
//! console messages.
//!
//! ## Commands
//!
//! ### Authentication
//!
//! - [`auth`] - Initiates the Spotify OAuth authentication flow with PKCE
//!   security
//!
//! ### Playlist Building
//!
//! - [`build`] - Reads song titles from a sheet or a library XML export,
//!   resolves them to tracks and fills a freshly created private playlist in
//!   bounded-size parts
//!
//! ### Title Extraction
//!
//! - [`extract`] - Pulls song titles out of a library XML export and writes
//!   them, sorted, into a single-column sheet
//!
//! ## Architecture Design
//!
//! The CLI functions are thin adapters: argument values go in, console
//! output comes out, and everything in between is delegated.
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Source / Pipeline Layer (Extraction, Resolution, Batching, Submission)
//!     ↓
//! API Layer (Spotify Integration)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! ## Error Handling Philosophy
//!
//! Fatal conditions terminate the process through the `error!` macro: an
//! input document that cannot be read, a playlist the service refuses to
//! create, missing authentication. Everything recoverable surfaces as a
//! warning while the command keeps going: a song that is not on Spotify or
//! a part that ran out of retry attempts never aborts the run, and the exit
//! code does not distinguish a partially filled playlist from a complete
//! one.
//!
//! ## Usage Patterns
//!
//! ### Initial Setup
//! ```bash
//! splcli auth                                    # Authenticate with Spotify
//! ```
//!
//! ### Regular Usage
//! ```bash
//! splcli build songs.csv "My New Playlist"      # Sheet to playlist
//! splcli build Library.xml "Archive" --chunk-size 50
//! splcli extract Library.xml song_names.csv     # Library export to sheet
//! ```

mod auth;
mod build;
mod extract;

pub use auth::auth;
pub use build::build;
pub use extract::extract;
