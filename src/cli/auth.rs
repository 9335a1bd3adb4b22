use crate::{server::SharedPkce, spotify};

/// Runs the interactive Spotify authorization flow. The shared state ties
/// this command to the callback server that receives the exchanged token.
pub async fn auth(shared_state: SharedPkce) {
    spotify::auth::auth(shared_state).await;
}
