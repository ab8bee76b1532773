//! Pairing of snapshot files across two directories
//!
//! Files are matched by package identity taken from the file name, so that
//! `Acme.Activities.1.2.0.json` pairs with `Acme.Activities.1.3.0.json`.

use crate::errors::{io_error, Result};
use crate::snapshot::is_snapshot_file;
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

/// One step of a directory merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilePairing {
    Paired { old: PathBuf, new: PathBuf },
    OnlyInOld(PathBuf),
    OnlyInNew(PathBuf),
}

/// Snapshot files directly inside `dir`, in package-identity order
///
/// The order is [`compare_package_files`] with ties broken by the
/// upper-cased path, which is the order [`pair_snapshot_files`] expects.
///
/// # Errors
///
/// Returns `Io` if the directory cannot be listed.
pub fn list_snapshot_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| io_error("list_snapshots", dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| io_error("list_snapshots", dir, e))?.path();
        if path.is_file() && is_snapshot_file(&path) {
            files.push(path);
        }
    }
    sort_snapshot_files(&mut files);
    Ok(files)
}

/// Sort files into the order [`pair_snapshot_files`] merges in
pub fn sort_snapshot_files(files: &mut [PathBuf]) {
    files.sort_by(|a, b| {
        compare_package_files(a, b).then_with(|| path_upper(a).cmp(&path_upper(b)))
    });
}

/// Order two snapshot files by package identity
///
/// Names are upper-cased and split on '.'. The first segments compare
/// ordinally; later segments compare while neither starts with a digit.
/// Once both reach a digit-led (version) segment the files are the same
/// package; a version on one side only sorts that side first.
pub fn compare_package_files(a: &Path, b: &Path) -> Ordering {
    let a = file_name_upper(a);
    let b = file_name_upper(b);
    let a: Vec<&str> = a.split('.').collect();
    let b: Vec<&str> = b.split('.').collect();

    match a[0].cmp(b[0]) {
        Ordering::Equal => {}
        other => return other,
    }

    for (x, y) in a.iter().zip(b.iter()).skip(1) {
        match (starts_with_digit(x), starts_with_digit(y)) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => match x.cmp(y) {
                Ordering::Equal => {}
                other => return other,
            },
        }
    }

    a.len().cmp(&b.len())
}

/// Merge two file lists by package identity
///
/// Both lists must be ordered by [`sort_snapshot_files`].
pub fn pair_snapshot_files(old: &[PathBuf], new: &[PathBuf]) -> Vec<FilePairing> {
    let mut pairings = Vec::new();
    let mut left = old.iter().peekable();
    let mut right = new.iter().peekable();

    while let (Some(&l), Some(&r)) = (left.peek(), right.peek()) {
        match compare_package_files(l, r) {
            Ordering::Less => {
                pairings.push(FilePairing::OnlyInOld(l.clone()));
                left.next();
            }
            Ordering::Greater => {
                pairings.push(FilePairing::OnlyInNew(r.clone()));
                right.next();
            }
            Ordering::Equal => {
                pairings.push(FilePairing::Paired {
                    old: l.clone(),
                    new: r.clone(),
                });
                left.next();
                right.next();
            }
        }
    }

    pairings.extend(left.cloned().map(FilePairing::OnlyInOld));
    pairings.extend(right.cloned().map(FilePairing::OnlyInNew));
    pairings
}

/// List and pair the snapshot files of two directories
///
/// # Errors
///
/// Returns `Io` if either directory cannot be listed.
pub fn pair_directories(old_dir: &Path, new_dir: &Path) -> Result<Vec<FilePairing>> {
    let old = list_snapshot_files(old_dir)?;
    let new = list_snapshot_files(new_dir)?;
    Ok(pair_snapshot_files(&old, &new))
}

fn path_upper(path: &Path) -> String {
    path.display().to_string().to_uppercase()
}

fn file_name_upper(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_uppercase())
        .unwrap_or_default()
}

fn starts_with_digit(segment: &str) -> bool {
    segment.chars().next().is_some_and(|c| c.is_ascii_digit())
}
