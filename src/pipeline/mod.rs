//! # Pipeline Module
//!
//! Orchestrates the way from a list of raw song titles to a filled Spotify
//! playlist. The stages run strictly in order, one external call at a time:
//!
//! ```text
//! ReadSource -> ResolveAll -> CreatePlaylist -> SubmitChunks -> Done
//! ```
//!
//! - **ReadSource**: the [`TitleSource`](crate::source::TitleSource) yields
//!   titles in document order. A source that cannot be opened or parsed
//!   aborts the run before any search happens.
//! - **ResolveAll**: [`resolver::TrackResolver`] searches one title at a
//!   time. A miss (or a failed search) drops the title from the sequence
//!   and the run continues.
//! - **CreatePlaylist**: a private playlist is created once per run. A
//!   rejection here is fatal because there is nothing to submit into.
//! - **SubmitChunks**: the resolved URIs are partitioned into bounded
//!   chunks and appended chunk by chunk, each chunk under the retry budget
//!   of [`submitter::RetryPolicy`]. A chunk that exhausts its budget is
//!   reported and skipped; later chunks still run.
//!
//! The external service is abstracted behind [`MusicService`] so the whole
//! pipeline can be driven against an in-memory fake in tests. The production
//! implementation is [`SpotifyClient`](crate::spotify::SpotifyClient),
//! constructed once in the CLI layer and borrowed here.

pub mod resolver;
pub mod submitter;

use std::fmt;

use async_trait::async_trait;

use crate::{
    info, success,
    source::{SourceError, TitleSource},
    types::Playlist,
    utils, warning,
};

use resolver::{Resolution, TrackResolver};
use submitter::{ChunkOutcome, PlaylistSubmitter, RetryPolicy};

/// The external music service capabilities the pipeline depends on.
///
/// One authenticated session implements all three calls; they are only ever
/// invoked sequentially.
#[async_trait]
pub trait MusicService: Send + Sync {
    /// Searches the track catalog for `title` and returns the URI of the
    /// single best match, if any.
    async fn search_track(&self, title: &str) -> Result<Option<String>, ServiceError>;

    /// Creates a private playlist owned by the configured user.
    async fn create_playlist(
        &self,
        name: &str,
        description: &str,
    ) -> Result<Playlist, ServiceError>;

    /// Appends `uris` in order to the end of the playlist's track list.
    async fn add_tracks(&self, playlist_id: &str, uris: &[String]) -> Result<(), ServiceError>;
}

#[derive(Debug)]
pub enum ServiceError {
    Http(reqwest::Error),
    Remote(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Http(e) => write!(f, "http error: {}", e),
            ServiceError::Remote(msg) => write!(f, "remote error: {}", msg),
        }
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        ServiceError::Http(err)
    }
}

#[derive(Debug)]
pub enum PipelineError {
    Source(SourceError),
    PlaylistCreate(ServiceError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Source(e) => write!(f, "cannot read song titles: {}", e),
            PipelineError::PlaylistCreate(e) => write!(f, "cannot create playlist: {}", e),
        }
    }
}

impl From<SourceError> for PipelineError {
    fn from(err: SourceError) -> Self {
        PipelineError::Source(err)
    }
}

/// Everything one run needs beyond the input document. CLI parsing builds
/// this once; the pipeline itself never touches arguments or env vars.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub playlist_name: String,
    pub playlist_description: String,
    pub chunk_size: usize,
    pub retry: RetryPolicy,
}

/// Per-title and per-chunk outcomes of a finished run.
///
/// The CLI surfaces progress as log lines while the run happens; the report
/// is for callers that want to inspect what was resolved and submitted.
#[derive(Debug)]
pub struct PipelineReport {
    pub resolutions: Vec<Resolution>,
    pub playlist: Playlist,
    pub submissions: Vec<ChunkOutcome>,
}

pub struct Pipeline<'a, S: MusicService> {
    service: &'a S,
    options: BuildOptions,
}

impl<'a, S: MusicService> Pipeline<'a, S> {
    pub fn new(service: &'a S, options: BuildOptions) -> Self {
        Pipeline { service, options }
    }

    /// Runs the full pipeline against `source`.
    ///
    /// Fatal outcomes (unreadable source, rejected playlist creation) come
    /// back as [`PipelineError`]. Missed titles and exhausted chunks are not
    /// errors; they are recorded in the report and the run keeps going.
    pub async fn run(&self, source: &TitleSource) -> Result<PipelineReport, PipelineError> {
        info!("Reading song titles from {}", source.path().display());
        let titles = source.read()?;
        info!("Found {} song titles", titles.len());

        let resolver = TrackResolver::new(self.service);
        info!("Searching for songs on Spotify...");
        let resolutions = resolver.resolve_all(&titles).await;
        let uris: Vec<String> = resolutions
            .iter()
            .filter_map(|resolution| resolution.uri.clone())
            .collect();

        info!("Creating a new playlist: {}", self.options.playlist_name);
        let submitter = PlaylistSubmitter::new(self.service, self.options.retry);
        let playlist = submitter
            .create_playlist(
                &self.options.playlist_name,
                &self.options.playlist_description,
            )
            .await
            .map_err(PipelineError::PlaylistCreate)?;
        success!("Created playlist '{}'", playlist.name);

        let chunks = utils::chunk_uris(&uris, self.options.chunk_size);
        let mut submissions = Vec::with_capacity(chunks.len());
        if chunks.is_empty() {
            info!("Nothing to add to playlist '{}'", playlist.name);
        } else {
            info!("Adding songs to the playlist in {} parts", chunks.len());
            for chunk in &chunks {
                info!(
                    "Adding part {}/{} ({} songs) to the playlist...",
                    chunk.index + 1,
                    chunks.len(),
                    chunk.uris.len()
                );
                let outcome = submitter.submit_chunk(&playlist, chunk).await;
                match &outcome {
                    ChunkOutcome::Submitted { .. } => {
                        success!("Added part {}/{}", chunk.index + 1, chunks.len());
                    }
                    ChunkOutcome::Exhausted {
                        attempts,
                        last_error,
                        ..
                    } => {
                        warning!(
                            "Failed to add part {}/{} after {} attempts: {}",
                            chunk.index + 1,
                            chunks.len(),
                            attempts,
                            last_error
                        );
                    }
                }
                submissions.push(outcome);
            }
        }

        Ok(PipelineReport {
            resolutions,
            playlist,
            submissions,
        })
    }
}
