use std::path::PathBuf;

use crate::{
    error,
    pipeline::{BuildOptions, Pipeline, submitter::RetryPolicy},
    source::TitleSource,
    spotify::SpotifyClient,
};

/// Builds a private playlist from an exported song list.
///
/// Titles come from `input` (a csv sheet, or a library export when the file
/// ends in `.xml`), each one is resolved to its best-matching track, and the
/// resolved tracks are appended to a newly created playlist in parts of at
/// most `chunk_size`. Progress is printed per title and per part as it
/// happens; a part that runs out of retry attempts is reported and skipped,
/// and the command still exits 0.
pub async fn build(input: PathBuf, name: String, description: String, chunk_size: usize) {
    let client = match SpotifyClient::from_saved_token().await {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to load token. Please run splcli auth\n Error: {}", e);
        }
    };

    let source = TitleSource::from_path(input);
    let options = BuildOptions {
        playlist_name: name,
        playlist_description: description,
        chunk_size,
        retry: RetryPolicy::default(),
    };

    let pipeline = Pipeline::new(&client, options);
    if let Err(e) = pipeline.run(&source).await {
        error!("Cannot build playlist. Err: {}", e);
    }
}
