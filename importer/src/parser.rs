use std::fs;
use std::path::Path;

use crate::catalogue::{Catalogue, MessageEntry};
use crate::error::ImportError;

/// Turns one raw line into an entry.
///
/// Newlines and double quotes are dropped wherever they appear, then the line
/// is split on `,`. Fields past the second are ignored and a missing value
/// becomes the empty string.
pub fn parse_line(line: &str) -> MessageEntry {
    let cleaned: String = line
        .chars()
        .filter(|ch| !matches!(ch, '\n' | '\r' | '"'))
        .collect();

    let mut parts = cleaned.split(',');
    let key = parts.next().unwrap_or_default();
    let value = parts.next().unwrap_or_default();

    MessageEntry::new(key, value)
}

pub fn parse_str(content: &str, locale: &str) -> Catalogue {
    let mut catalogue = Catalogue::new(locale);
    catalogue.extend(content.split_inclusive('\n').map(parse_line));
    catalogue
}

pub fn parse_file(path: &Path, locale: &str) -> Result<Catalogue, ImportError> {
    let content = fs::read_to_string(path).map_err(|source| ImportError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_str(&content, locale))
}
