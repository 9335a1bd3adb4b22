use std::path::Path;

use crate::source::SourceError;

/// Reads song titles from the first column of a csv sheet. The first row is
/// a header and is skipped; blank cells are kept verbatim and a ragged row
/// without a first cell reads as the empty string.
pub fn read_titles(path: &Path) -> Result<Vec<String>, SourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut titles = Vec::new();
    for record in reader.records() {
        let record = record?;
        titles.push(record.get(0).unwrap_or("").to_string());
    }

    Ok(titles)
}

/// Writes titles as a single-column sheet labeled `Song Name`, one row per
/// title, duplicates preserved.
pub fn write_titles(path: &Path, titles: &[String]) -> Result<(), SourceError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["Song Name"])?;
    for title in titles {
        writer.write_record([title.as_str()])?;
    }
    writer.flush()?;

    Ok(())
}
