use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use glob::MatchOptions;
use log::{debug, warn};

use crate::models::EdsignError;
use crate::utils::fs::is_signature_file;

/// What to do with a directory the pattern matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directories {
    /// Leave the directory and everything inside it alone.
    Skip,
    /// Take the regular files directly inside it.
    Expand,
}

/// Wildcards do not match a leading dot, so `*` leaves `.env` and `.git` alone.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: true,
};

/// Expands a glob pattern into the ordered list of files to process.
///
/// Existing `.sig` artifacts are skipped. Matching nothing is reported as the
/// pattern itself not being found.
pub fn expand_pattern(pattern: &str, directories: Directories) -> Result<Vec<PathBuf>, EdsignError> {
    let entries = glob::glob_with(pattern, MATCH_OPTIONS)
        .map_err(|e| EdsignError::Format(format!("invalid pattern {}: {}", pattern, e)))?;

    let mut seen = HashSet::new();
    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            EdsignError::io("Failed to read", path, io::Error::from(e))
        })?;

        let candidates = match (path.is_dir(), directories) {
            (false, _) => vec![path],
            (true, Directories::Expand) => list_directory(&path)?,
            (true, Directories::Skip) => {
                warn!("Skipping directory {}", path.display());
                continue;
            }
        };

        for candidate in candidates {
            if is_signature_file(&candidate) {
                debug!("Skipping signature artifact {}", candidate.display());
                continue;
            }
            if seen.insert(candidate.clone()) {
                files.push(candidate);
            }
        }
    }

    if files.is_empty() {
        return Err(EdsignError::NotFound(PathBuf::from(pattern)));
    }
    debug!("Pattern {} expanded to {} file(s)", pattern, files.len());
    Ok(files)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

fn list_directory(dir: &Path) -> Result<Vec<PathBuf>, EdsignError> {
    let entries = fs::read_dir(dir).map_err(|e| EdsignError::io("Failed to list", dir, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| EdsignError::io("Failed to list", dir, e))?;
        let path = entry.path();
        if path.is_file() && !is_hidden(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
