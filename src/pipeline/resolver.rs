use crate::{info, pipeline::MusicService, warning};

/// Outcome of resolving one title: the URI of the best match, or a miss.
/// Every title produces exactly one resolution; there is no second-choice
/// fallback.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub title: String,
    pub uri: Option<String>,
}

impl Resolution {
    pub fn is_hit(&self) -> bool {
        self.uri.is_some()
    }
}

/// Resolves song titles to track URIs through the catalog search.
pub struct TrackResolver<'a, S: MusicService> {
    service: &'a S,
}

impl<'a, S: MusicService> TrackResolver<'a, S> {
    pub fn new(service: &'a S) -> Self {
        TrackResolver { service }
    }

    /// Issues a single track search for `title`.
    ///
    /// A failed search is treated like a miss and is not retried; only
    /// chunk submission has a retry budget.
    pub async fn resolve(&self, title: &str) -> Resolution {
        match self.service.search_track(title).await {
            Ok(Some(uri)) => {
                info!("Found '{}' on Spotify", title);
                Resolution {
                    title: title.to_string(),
                    uri: Some(uri),
                }
            }
            Ok(None) => {
                warning!("Song '{}' not found on Spotify and will be skipped", title);
                Resolution {
                    title: title.to_string(),
                    uri: None,
                }
            }
            Err(e) => {
                warning!("Search for '{}' failed and the song will be skipped: {}", title, e);
                Resolution {
                    title: title.to_string(),
                    uri: None,
                }
            }
        }
    }

    /// Resolves all titles in order, one search at a time. The next search
    /// does not start before the previous one returned.
    pub async fn resolve_all(&self, titles: &[String]) -> Vec<Resolution> {
        let mut resolutions = Vec::with_capacity(titles.len());
        for title in titles {
            resolutions.push(self.resolve(title).await);
        }
        resolutions
    }
}
