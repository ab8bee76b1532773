//! Wildcard expansion of command-line paths
//!
//! A path that does not exist is read as a file-name pattern over its parent
//! directory (`snapshots/Acme.*.json`). Only the last component may hold
//! wildcards, and matching is case-insensitive. A path that exists, or whose
//! pattern matches nothing, is kept so that loading reports it.

use glob::{MatchOptions, Pattern};
use std::fs;
use std::path::{Path, PathBuf};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Every file matching `path`, in case-insensitive name order
///
/// Returns `[path]` when the path exists or nothing matches.
pub fn expand_all(path: &Path) -> Vec<PathBuf> {
    let matches = matching_files(path);
    if matches.is_empty() {
        vec![path.to_path_buf()]
    } else {
        matches
    }
}

/// The single file matching `path`
///
/// An ambiguous pattern is kept as given, like an unmatched one.
pub fn expand_single(path: &Path) -> PathBuf {
    let mut matches = matching_files(path);
    if matches.len() == 1 {
        matches.remove(0)
    } else {
        if matches.len() > 1 {
            tracing::debug!(
                path = %path.display(),
                matches = matches.len(),
                "ambiguous path pattern kept as given"
            );
        }
        path.to_path_buf()
    }
}

fn matching_files(path: &Path) -> Vec<PathBuf> {
    if path.exists() {
        return Vec::new();
    }
    let Some(file_pattern) = path.file_name().and_then(|n| n.to_str()) else {
        return Vec::new();
    };
    let pattern = match Pattern::new(file_pattern) {
        Ok(pattern) => pattern,
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "path is not a valid pattern");
            return Vec::new();
        }
    };

    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    let dir = if parent.as_os_str().is_empty() {
        Path::new(".")
    } else {
        parent
    };
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut matches: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .filter(|name| pattern.matches_with(name, MATCH_OPTIONS))
        .map(|name| parent.join(name))
        .collect();
    matches.sort_by_cached_key(|p| p.display().to_string().to_uppercase());
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn dir_with(names: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in names {
            fs::write(dir.path().join(name), "{}").unwrap();
        }
        dir
    }

    #[test]
    fn test_existing_path_is_kept() {
        let dir = dir_with(&["Acme.1.0.json"]);
        let path = dir.path().join("Acme.1.0.json");

        assert_eq!(expand_single(&path), path);
        assert_eq!(expand_all(&path), vec![path]);
    }

    #[test]
    fn test_single_match_replaces_pattern() {
        let dir = dir_with(&["Acme.1.0.json", "Other.2.0.json"]);

        assert_eq!(
            expand_single(&dir.path().join("acme.*.json")),
            dir.path().join("Acme.1.0.json")
        );
    }

    #[test]
    fn test_ambiguous_or_unmatched_pattern_is_kept() {
        let dir = dir_with(&["Acme.1.0.json", "Acme.1.1.json"]);
        let ambiguous = dir.path().join("Acme.*.json");
        let unmatched = dir.path().join("Zeta.*.json");

        assert_eq!(expand_single(&ambiguous), ambiguous);
        assert_eq!(expand_single(&unmatched), unmatched);
        assert_eq!(expand_all(&unmatched), vec![unmatched]);
    }

    #[test]
    fn test_expand_all_lists_every_match_in_order() {
        let dir = dir_with(&["b.1.json", "A.1.json", "notes.txt"]);
        fs::create_dir(dir.path().join("c.1.json")).unwrap();

        assert_eq!(
            expand_all(&dir.path().join("*.json")),
            vec![dir.path().join("A.1.json"), dir.path().join("b.1.json")]
        );
    }
}
