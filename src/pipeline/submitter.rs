use std::time::Duration;

use tokio::time::sleep;

use crate::{
    pipeline::{MusicService, ServiceError},
    types::{Chunk, Playlist},
};

/// Bounded retry with a fixed delay between attempts. No backoff, no
/// jitter.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    /// `max_attempts` is clamped to at least one attempt.
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        RetryPolicy {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy::new(5, Duration::from_secs(2))
    }
}

/// Tagged result of one chunk submission, after retries.
#[derive(Debug)]
pub enum ChunkOutcome {
    Submitted {
        index: usize,
        attempts: u32,
    },
    Exhausted {
        index: usize,
        attempts: u32,
        last_error: ServiceError,
    },
}

/// Creates the target playlist and appends chunks to it.
pub struct PlaylistSubmitter<'a, S: MusicService> {
    service: &'a S,
    retry: RetryPolicy,
}

impl<'a, S: MusicService> PlaylistSubmitter<'a, S> {
    pub fn new(service: &'a S, retry: RetryPolicy) -> Self {
        PlaylistSubmitter { service, retry }
    }

    /// Creates the private playlist that all chunks of this run go into.
    /// Not retried; a rejection here aborts the run before any submission.
    pub async fn create_playlist(
        &self,
        name: &str,
        description: &str,
    ) -> Result<Playlist, ServiceError> {
        self.service.create_playlist(name, description).await
    }

    /// Appends the chunk's URIs to the playlist, retrying per the policy.
    ///
    /// Every attempt mutates remote state and is not idempotency-guarded: a
    /// submission the server applied but reported as failed (for example a
    /// timeout on the response) gets retried and can duplicate tracks in
    /// the playlist.
    pub async fn submit_chunk(&self, playlist: &Playlist, chunk: &Chunk) -> ChunkOutcome {
        let mut last_error: Option<ServiceError> = None;
        for attempt in 1..=self.retry.max_attempts {
            match self.service.add_tracks(&playlist.id, &chunk.uris).await {
                Ok(()) => {
                    return ChunkOutcome::Submitted {
                        index: chunk.index,
                        attempts: attempt,
                    };
                }
                Err(e) => {
                    last_error = Some(e);
                    if attempt < self.retry.max_attempts {
                        sleep(self.retry.delay).await;
                    }
                }
            }
        }

        // max_attempts >= 1, so at least one error was recorded
        let last_error = last_error.unwrap_or_else(|| {
            ServiceError::Remote(String::from("no submission attempt was made"))
        });
        ChunkOutcome::Exhausted {
            index: chunk.index,
            attempts: self.retry.max_attempts,
            last_error,
        }
    }
}
