use std::{collections::HashMap, fs, sync::Mutex, time::Duration};

use async_trait::async_trait;
use splcli::{
    pipeline::{
        BuildOptions, MusicService, Pipeline, PipelineError, ServiceError,
        resolver::TrackResolver,
        submitter::{ChunkOutcome, RetryPolicy},
    },
    source::TitleSource,
    types::Playlist,
};
use tempfile::TempDir;

// In-memory stand-in for the Spotify session: a fixed title->URI catalog, a
// scripted number of add_tracks failures and a record of everything that was
// created and added.
struct FakeService {
    catalog: HashMap<String, String>,
    fail_adds: Mutex<u32>,
    fail_search: bool,
    reject_create: bool,
    created: Mutex<Vec<(String, String)>>,
    added: Mutex<Vec<Vec<String>>>,
}

impl FakeService {
    fn new() -> Self {
        FakeService {
            catalog: HashMap::new(),
            fail_adds: Mutex::new(0),
            fail_search: false,
            reject_create: false,
            created: Mutex::new(Vec::new()),
            added: Mutex::new(Vec::new()),
        }
    }

    // Every given title resolves, to a URI derived from it
    fn with_tracks(mut self, titles: &[String]) -> Self {
        self.catalog = titles
            .iter()
            .map(|title| (title.clone(), uri_for(title)))
            .collect();
        self
    }

    // The next n add_tracks calls fail before any call succeeds
    fn failing_adds(self, n: u32) -> Self {
        *self.fail_adds.lock().unwrap() = n;
        self
    }

    fn failing_search(mut self) -> Self {
        self.fail_search = true;
        self
    }

    fn rejecting_create(mut self) -> Self {
        self.reject_create = true;
        self
    }

    // Playlist contents after the run: all successfully added parts, flattened
    fn playlist_contents(&self) -> Vec<String> {
        self.added
            .lock()
            .unwrap()
            .iter()
            .flatten()
            .cloned()
            .collect()
    }

    fn added_part_sizes(&self) -> Vec<usize> {
        self.added
            .lock()
            .unwrap()
            .iter()
            .map(|part| part.len())
            .collect()
    }
}

#[async_trait]
impl MusicService for FakeService {
    async fn search_track(&self, title: &str) -> Result<Option<String>, ServiceError> {
        if self.fail_search {
            return Err(ServiceError::Remote("search is down".to_string()));
        }
        Ok(self.catalog.get(title).cloned())
    }

    async fn create_playlist(
        &self,
        name: &str,
        description: &str,
    ) -> Result<Playlist, ServiceError> {
        if self.reject_create {
            return Err(ServiceError::Remote("403: insufficient scope".to_string()));
        }
        self.created
            .lock()
            .unwrap()
            .push((name.to_string(), description.to_string()));
        Ok(Playlist {
            id: "playlist-1".to_string(),
            name: name.to_string(),
            description: Some(description.to_string()),
            public: Some(false),
        })
    }

    async fn add_tracks(&self, _playlist_id: &str, uris: &[String]) -> Result<(), ServiceError> {
        {
            let mut failures = self.fail_adds.lock().unwrap();
            if *failures > 0 {
                *failures -= 1;
                return Err(ServiceError::Remote("429: rate limited".to_string()));
            }
        }
        self.added.lock().unwrap().push(uris.to_vec());
        Ok(())
    }
}

fn uri_for(title: &str) -> String {
    format!("spotify:track:{}", title)
}

// Helper function to write a one-column sheet with a header row
fn sheet_with_titles(dir: &TempDir, titles: &[String]) -> TitleSource {
    let mut contents = String::from("Song Name\n");
    for title in titles {
        contents.push_str(title);
        contents.push('\n');
    }
    let path = dir.path().join("songs.csv");
    fs::write(&path, contents).unwrap();
    TitleSource::from_path(path)
}

// Helper function for run options with a retry delay tests need not wait for
fn build_options(chunk_size: usize) -> BuildOptions {
    BuildOptions {
        playlist_name: "Test Playlist".to_string(),
        playlist_description: "Playlist created from songs.".to_string(),
        chunk_size,
        retry: RetryPolicy::new(5, Duration::ZERO),
    }
}

#[tokio::test]
async fn test_hits_keep_source_order_and_misses_are_skipped() {
    let dir = TempDir::new().unwrap();
    let source = sheet_with_titles(
        &dir,
        &[
            "Song A".to_string(),
            "Song B".to_string(),
            "Unknown Song".to_string(),
        ],
    );
    let service = FakeService::new().with_tracks(&[
        "Song A".to_string(),
        "Song B".to_string(),
    ]);

    let report = Pipeline::new(&service, build_options(25))
        .run(&source)
        .await
        .unwrap();

    // One resolution per title, in source order
    let titles: Vec<&str> = report
        .resolutions
        .iter()
        .map(|resolution| resolution.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Song A", "Song B", "Unknown Song"]);
    assert!(report.resolutions[0].is_hit());
    assert!(report.resolutions[1].is_hit());
    assert!(!report.resolutions[2].is_hit());

    // Both hits fit in one part and end up in the playlist in order
    assert_eq!(report.submissions.len(), 1);
    assert!(matches!(
        report.submissions[0],
        ChunkOutcome::Submitted {
            index: 0,
            attempts: 1
        }
    ));
    assert_eq!(
        service.playlist_contents(),
        vec![uri_for("Song A"), uri_for("Song B")]
    );
}

#[tokio::test]
async fn test_sixty_tracks_submit_as_three_parts_in_order() {
    let dir = TempDir::new().unwrap();
    let titles: Vec<String> = (0..60).map(|i| format!("Song {:02}", i)).collect();
    let source = sheet_with_titles(&dir, &titles);
    let service = FakeService::new().with_tracks(&titles);

    let report = Pipeline::new(&service, build_options(25))
        .run(&source)
        .await
        .unwrap();

    assert_eq!(report.submissions.len(), 3);
    assert_eq!(service.added_part_sizes(), vec![25, 25, 10]);

    // Concatenated parts reproduce the resolved sequence exactly
    let expected: Vec<String> = titles.iter().map(|title| uri_for(title)).collect();
    assert_eq!(service.playlist_contents(), expected);
}

#[tokio::test]
async fn test_submission_succeeds_on_the_final_attempt() {
    let dir = TempDir::new().unwrap();
    let titles = vec!["Song A".to_string()];
    let source = sheet_with_titles(&dir, &titles);
    let service = FakeService::new().with_tracks(&titles).failing_adds(4);

    let report = Pipeline::new(&service, build_options(25))
        .run(&source)
        .await
        .unwrap();

    // Four failures eat four attempts; the fifth and last one lands
    assert_eq!(report.submissions.len(), 1);
    assert!(matches!(
        report.submissions[0],
        ChunkOutcome::Submitted {
            index: 0,
            attempts: 5
        }
    ));
    assert_eq!(service.playlist_contents(), vec![uri_for("Song A")]);
}

#[tokio::test]
async fn test_exhausted_part_does_not_block_later_parts() {
    let dir = TempDir::new().unwrap();
    let titles: Vec<String> = (0..30).map(|i| format!("Song {:02}", i)).collect();
    let source = sheet_with_titles(&dir, &titles);
    // Exactly the first part's whole retry budget fails
    let service = FakeService::new().with_tracks(&titles).failing_adds(5);

    let report = Pipeline::new(&service, build_options(25))
        .run(&source)
        .await
        .unwrap();

    assert_eq!(report.submissions.len(), 2);
    assert!(matches!(
        report.submissions[0],
        ChunkOutcome::Exhausted {
            index: 0,
            attempts: 5,
            ..
        }
    ));
    assert!(matches!(
        report.submissions[1],
        ChunkOutcome::Submitted {
            index: 1,
            attempts: 1
        }
    ));

    // Only the second part's tracks made it into the playlist
    let expected: Vec<String> = titles[25..].iter().map(|title| uri_for(title)).collect();
    assert_eq!(service.playlist_contents(), expected);
}

#[tokio::test]
async fn test_all_misses_leave_the_created_playlist_empty() {
    let dir = TempDir::new().unwrap();
    let titles = vec!["Unknown One".to_string(), "Unknown Two".to_string()];
    let source = sheet_with_titles(&dir, &titles);
    let service = FakeService::new();

    let report = Pipeline::new(&service, build_options(25))
        .run(&source)
        .await
        .unwrap();

    // The playlist is still created, with the configured name and
    // description, but nothing is submitted into it and that is not an error
    assert_eq!(
        *service.created.lock().unwrap(),
        vec![(
            "Test Playlist".to_string(),
            "Playlist created from songs.".to_string()
        )]
    );
    assert_eq!(report.playlist.name, "Test Playlist");
    assert!(report.submissions.is_empty());
    assert!(service.playlist_contents().is_empty());
}

#[tokio::test]
async fn test_unreadable_source_aborts_before_any_playlist_exists() {
    let dir = TempDir::new().unwrap();
    let source = TitleSource::from_path(dir.path().join("absent.csv"));
    let service = FakeService::new();

    let result = Pipeline::new(&service, build_options(25)).run(&source).await;

    assert!(matches!(result, Err(PipelineError::Source(_))));
    assert!(service.created.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_rejected_playlist_creation_aborts_the_run() {
    let dir = TempDir::new().unwrap();
    let titles = vec!["Song A".to_string()];
    let source = sheet_with_titles(&dir, &titles);
    let service = FakeService::new().with_tracks(&titles).rejecting_create();

    let result = Pipeline::new(&service, build_options(25)).run(&source).await;

    assert!(matches!(result, Err(PipelineError::PlaylistCreate(_))));
    assert!(service.playlist_contents().is_empty());
}

#[tokio::test]
async fn test_failed_search_counts_as_a_miss() {
    // A search transport failure is not retried; the title is skipped just
    // like a genuine miss
    let service = FakeService::new().failing_search();
    let resolver = TrackResolver::new(&service);

    let resolution = resolver.resolve("Song A").await;
    assert_eq!(resolution.title, "Song A");
    assert!(!resolution.is_hit());
}

#[tokio::test]
async fn test_resolver_keeps_duplicate_titles_as_separate_hits() {
    let titles = vec!["Song A".to_string(), "Song A".to_string()];
    let service = FakeService::new().with_tracks(&titles);
    let resolver = TrackResolver::new(&service);

    let resolutions = resolver.resolve_all(&titles).await;
    assert_eq!(resolutions.len(), 2);
    assert!(resolutions.iter().all(|resolution| resolution.is_hit()));
}
