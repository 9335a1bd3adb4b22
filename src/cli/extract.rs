use std::path::PathBuf;

use crate::{
    error, info,
    source::{self, TitleSource},
    success,
};

/// Extracts song titles from a library XML export into a csv sheet.
///
/// The titles are written sorted lexicographically under a single
/// `Song Name` column, duplicates included. The input is always read as a
/// library export, whatever its extension.
pub async fn extract(input: PathBuf, output: PathBuf) {
    let source = TitleSource::Library(input);
    info!("Reading song titles from {}", source.path().display());

    let mut titles = match source.read() {
        Ok(titles) => titles,
        Err(e) => {
            error!("Cannot read song titles. Err: {}", e);
        }
    };
    titles.sort();

    if let Err(e) = source::write_titles(&output, &titles) {
        error!("Cannot write song names. Err: {}", e);
    }

    success!(
        "Extracted {} song names, sorted them, and saved to {}",
        titles.len(),
        output.display()
    );
}
