use std::{fs, path::PathBuf};

use splcli::source::{self, TitleSource};
use tempfile::TempDir;

// Helper function to write an input fixture into the temp dir
fn fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_sheet_skips_header_and_reads_first_column() {
    let dir = TempDir::new().unwrap();
    let path = fixture(
        &dir,
        "songs.csv",
        "Song Name,Artist\nSong A,Alpha\nSong B,Beta\n",
    );

    let titles = TitleSource::from_path(path).read().unwrap();
    assert_eq!(titles, vec!["Song A", "Song B"]);
}

#[test]
fn test_sheet_keeps_blanks_whitespace_and_duplicates_verbatim() {
    let dir = TempDir::new().unwrap();
    let path = fixture(
        &dir,
        "songs.csv",
        "Song Name,Artist\n,Alpha\n  Song A,Beta\nSong A,Gamma\nSong A,Delta\n",
    );

    // Nothing is trimmed or filtered; order is the row order
    let titles = TitleSource::from_path(path).read().unwrap();
    assert_eq!(titles, vec!["", "  Song A", "Song A", "Song A"]);
}

#[test]
fn test_sheet_tolerates_ragged_rows() {
    let dir = TempDir::new().unwrap();
    let path = fixture(
        &dir,
        "songs.csv",
        "Song Name,Artist\nSolo Title\nSong B,Beta\n",
    );

    let titles = TitleSource::from_path(path).read().unwrap();
    assert_eq!(titles, vec!["Solo Title", "Song B"]);
}

#[test]
fn test_library_scan_takes_string_after_name_key() {
    let dir = TempDir::new().unwrap();
    let path = fixture(
        &dir,
        "Library.xml",
        r#"<?xml version="1.0" encoding="UTF-8"?>
<plist version="1.0">
<dict>
    <key>Tracks</key>
    <dict>
        <key>1001</key>
        <dict>
            <key>Name</key><string>Track One</string>
            <key>Artist</key><string>Someone</string>
            <key>Name</key><string>Track Two</string>
        </dict>
    </dict>
</dict>
</plist>
"#,
    );

    // The Artist key/string pair in between must not leak into the titles
    let titles = TitleSource::from_path(path).read().unwrap();
    assert_eq!(titles, vec!["Track One", "Track Two"]);
}

#[test]
fn test_library_scan_key_after_name_key_emits_nothing() {
    // A Name key directly followed by another key clears the pending flag,
    // so the string after that second key is not mistaken for a title
    let dir = TempDir::new().unwrap();
    let path = fixture(
        &dir,
        "Library.xml",
        "<plist><dict>\
         <key>Name</key><key>Artist</key><string>Someone</string>\
         <key>Name</key><string>Real Title</string>\
         </dict></plist>",
    );

    let titles = TitleSource::from_path(path).read().unwrap();
    assert_eq!(titles, vec!["Real Title"]);
}

#[test]
fn test_library_scan_keeps_duplicates_and_document_order() {
    let dir = TempDir::new().unwrap();
    let path = fixture(
        &dir,
        "Library.xml",
        "<plist><dict>\
         <key>Name</key><string>Zebra</string>\
         <key>Name</key><string>Alpha</string>\
         <key>Name</key><string>Zebra</string>\
         </dict></plist>",
    );

    // No sorting and no deduplication at this layer
    let titles = TitleSource::from_path(path).read().unwrap();
    assert_eq!(titles, vec!["Zebra", "Alpha", "Zebra"]);
}

#[test]
fn test_library_scan_reads_empty_string_element_as_empty_title() {
    let dir = TempDir::new().unwrap();
    let path = fixture(
        &dir,
        "Library.xml",
        "<plist><dict><key>Name</key><string/></dict></plist>",
    );

    let titles = TitleSource::from_path(path).read().unwrap();
    assert_eq!(titles, vec![""]);
}

#[test]
fn test_source_variant_follows_file_extension() {
    assert_eq!(
        TitleSource::from_path(PathBuf::from("Library.xml")),
        TitleSource::Library(PathBuf::from("Library.xml"))
    );
    assert_eq!(
        TitleSource::from_path(PathBuf::from("LIBRARY.XML")),
        TitleSource::Library(PathBuf::from("LIBRARY.XML"))
    );
    assert_eq!(
        TitleSource::from_path(PathBuf::from("songs.csv")),
        TitleSource::Sheet(PathBuf::from("songs.csv"))
    );
    assert_eq!(
        TitleSource::from_path(PathBuf::from("songs")),
        TitleSource::Sheet(PathBuf::from("songs"))
    );
}

#[test]
fn test_missing_input_is_an_error() {
    let dir = TempDir::new().unwrap();

    let sheet = TitleSource::from_path(dir.path().join("absent.csv"));
    assert!(sheet.read().is_err());

    let library = TitleSource::from_path(dir.path().join("absent.xml"));
    assert!(library.read().is_err());
}

#[test]
fn test_malformed_library_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir, "Library.xml", "<plist><dict></plist>");

    assert!(TitleSource::from_path(path).read().is_err());
}

#[test]
fn test_write_titles_labels_a_single_column() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("song_names.csv");

    let titles = vec![
        "Alpha".to_string(),
        "Beta".to_string(),
        "Alpha".to_string(),
    ];
    source::write_titles(&out, &titles).unwrap();

    // Header row plus one row per title, duplicates preserved
    let written = fs::read_to_string(&out).unwrap();
    assert_eq!(written, "Song Name\nAlpha\nBeta\nAlpha\n");
}

#[test]
fn test_written_sheet_reads_back_as_the_same_titles() {
    // An extracted sheet is a valid build input, commas and all
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("song_names.csv");

    let titles = vec!["Comma, The Song".to_string(), "Plain Song".to_string()];
    source::write_titles(&out, &titles).unwrap();

    let read_back = TitleSource::from_path(out).read().unwrap();
    assert_eq!(read_back, titles);
}
