//! # API Module
//!
//! HTTP endpoints served by the short-lived local server during the OAuth
//! flow.
//!
//! ## Endpoints
//!
//! - [`callback`] - Receives the redirect from Spotify's authorization
//!   server and completes the PKCE flow by exchanging the authorization
//!   code for a token. The token lands in the shared state the auth command
//!   polls.
//! - [`health`] - Reports name, version and status, mainly useful to check
//!   that the callback server actually came up on the configured address.
//!
//! Handlers are plain async functions wired into an [`axum`] router by
//! [`crate::server::start_api_server`].

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
