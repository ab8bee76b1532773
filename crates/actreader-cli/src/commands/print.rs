//! Print command
//!
//! Usage: actreader print [DIRECTORY|FILE.json|PATTERN]...
//!
//! A pattern such as `snapshots/Acme.*.json` adds every file it matches.

use super::Session;
use actreader_core::errors::ExError;
use actreader_core::render::render_catalogue_listing;
use actreader_store::expand::expand_all;
use actreader_store::pairing::list_snapshot_files;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct PrintArgs {
    /// Snapshot files, file-name patterns, or directories whose snapshot
    /// files are all read
    pub paths: Vec<PathBuf>,
}

/// Execute print command
///
/// Listing never counts differences, so the result is always zero on success.
pub fn execute(args: PrintArgs, session: &mut Session) -> Result<usize, ExError> {
    let mut files = Vec::new();
    for path in args.paths {
        if path.is_dir() {
            files.extend(list_snapshot_files(&path)?);
        } else {
            files.extend(expand_all(&path));
        }
    }

    let mut catalogue = session.new_catalogue();
    for file in &files {
        session.load_into(&mut catalogue, file);
    }

    print!("{}", render_catalogue_listing(&catalogue, &session.simplifier()));
    Ok(0)
}
