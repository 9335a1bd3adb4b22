use std::path::Path;

use crate::source::SourceError;

/// Reads song titles from a property-list style XML library export.
///
/// Walks all elements in document order with a single-slot flag: a `key`
/// element whose text is exactly `Name` arms the flag, and the very next
/// element consumes it no matter its tag. Only a `string` element consumes
/// it into a title, so a `key` followed by another `key` never emits one.
pub fn read_titles(path: &Path) -> Result<Vec<String>, SourceError> {
    let xml = std::fs::read_to_string(path)?;
    let doc = roxmltree::Document::parse(&xml)?;

    let mut titles = Vec::new();
    let mut take_next_string = false;
    for node in doc.descendants().filter(|n| n.is_element()) {
        if take_next_string && node.tag_name().name() == "string" {
            titles.push(node.text().unwrap_or_default().to_string());
            take_next_string = false;
        } else if node.tag_name().name() == "key" && node.text() == Some("Name") {
            take_next_string = true;
        } else {
            take_next_string = false;
        }
    }

    Ok(titles)
}
