//! # Spotify Integration Module
//!
//! The integration layer between splcli and the Spotify Web API. It covers
//! the two concerns the application has on the wire:
//!
//! - **Authentication** ([`auth`]): the OAuth 2.0 PKCE flow. A code
//!   verifier/challenge pair is generated, the user authorizes in the
//!   browser, a local callback server receives the authorization code, and
//!   the code is exchanged for a token that is persisted for later runs.
//!   PKCE needs no client secret, so none is ever stored.
//! - **API session** ([`client`]): [`SpotifyClient`], the single
//!   authenticated session of a run. It owns one `reqwest::Client` and the
//!   persisted token (refreshing it shortly before expiry) and implements
//!   the service seam the pipeline consumes: track search, playlist
//!   creation, batched track adds.
//!
//! ## Request Style
//!
//! All API calls use bearer authentication against the configured base URL.
//! Responses with non-success status codes are turned into errors carrying
//! the response body, which is where Spotify puts its error messages.
//!
//! ## Endpoints Used
//!
//! - `GET /search?q=<title>&type=track&limit=1` - best-match track lookup
//! - `POST /users/{user_id}/playlists` - create a private playlist
//! - `POST /playlists/{playlist_id}/tracks` - append one chunk of URIs
//! - `POST <token_url>` - authorization-code exchange and refresh grants
//!
//! ## Thread Safety
//!
//! Designed for sequential async use: one call at a time, shared state
//! behind `Arc<Mutex<>>` only where the callback server requires it.

pub mod auth;
pub mod client;

pub use client::SpotifyClient;
