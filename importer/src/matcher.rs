use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use walkdir::WalkDir;

use crate::error::ImportError;

static FILE_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z]+\.[a-z]{2}\.[a-z]+$").expect("file name pattern is valid")
});

/// An input file whose name follows `<domain>.<locale>.<extension>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTask {
    pub file_path: PathBuf,
    pub domain: String,
    pub locale: String,
}

impl FileTask {
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        if !FILE_NAME_PATTERN.is_match(name) {
            return None;
        }

        let mut segments = name.split('.');
        let domain = segments.next()?;
        let locale = segments.next()?;

        Some(Self {
            file_path: path.to_path_buf(),
            domain: domain.to_owned(),
            locale: locale.to_owned(),
        })
    }
}

/// Lazily lists the matching files directly inside `dir`. Subdirectories are
/// not descended into.
pub fn matching_files(dir: &Path) -> impl Iterator<Item = Result<FileTask, ImportError>> + '_ {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(move |entry| {
            let entry = match entry {
                Ok(entry) => entry,
                Err(source) => {
                    return Some(Err(ImportError::Scan {
                        path: dir.to_path_buf(),
                        source,
                    }));
                }
            };

            if !entry.file_type().is_file() {
                return None;
            }

            FileTask::from_path(entry.path()).map(Ok)
        })
}
