//! Diff command
//!
//! Usage:
//!   actreader diff [--type none|simple|full] OLD.json NEW.json [NEW2.json]
//!   actreader diff [--type none|simple|full] OLD_DIR NEW_DIR
//!
//! A file argument that does not exist may be a pattern (`old/Acme.*.json`);
//! it is replaced by the file it matches when exactly one does.

use super::Session;
use actreader_core::diff::{ClassComparator, ConsoleReport, EventLog, TypeSensitivity};
use actreader_core::errors::{ExError, ExErrorKind};
use actreader_core::{log_op_end, log_op_start};
use actreader_store::expand::expand_single;
use actreader_store::pairing::{pair_directories, FilePairing};
use clap::{Args, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// How property types are compared and shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TypeFormat {
    /// Compare names only
    None,
    /// Compare types; show simplified type names
    Simple,
    /// Compare types; show full type names
    Full,
}

impl From<TypeFormat> for TypeSensitivity {
    fn from(format: TypeFormat) -> Self {
        match format {
            TypeFormat::None => TypeSensitivity::None,
            TypeFormat::Simple => TypeSensitivity::TypedLoose,
            TypeFormat::Full => TypeSensitivity::TypedStrict,
        }
    }
}

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Old snapshot file, or directory of snapshot files
    pub old: PathBuf,

    /// New snapshot file, or directory of snapshot files
    pub new: PathBuf,

    /// Second new-side snapshot file merged into the new catalogue
    pub new_extra: Option<PathBuf>,

    /// Property type comparison and display
    #[arg(long = "type", value_enum, default_value_t = TypeFormat::Simple)]
    pub type_format: TypeFormat,

    /// Print diff events as JSON instead of the text report
    #[arg(long)]
    pub json: bool,
}

/// Execute diff command, returning the number of differences found
pub fn execute(mut args: DiffArgs, session: &mut Session) -> Result<usize, ExError> {
    args.old = expand_single(&args.old);
    args.new = expand_single(&args.new);
    args.new_extra = args.new_extra.as_deref().map(expand_single);

    if args.old.is_dir() && args.new.is_dir() {
        if args.new_extra.is_some() {
            return Err(ExError::new(ExErrorKind::InvalidInput)
                .with_op("diff")
                .with_message("A third path cannot be given when comparing directories."));
        }
        return diff_directories(&args, session);
    }

    let mut new_paths = vec![args.new.clone()];
    new_paths.extend(args.new_extra.clone());
    Ok(diff_files(&args, session, &args.old, &new_paths))
}

fn diff_directories(args: &DiffArgs, session: &mut Session) -> Result<usize, ExError> {
    let pairings = pair_directories(&args.old, &args.new)?;

    let mut differences = 0;
    let mut newline = true;
    for pairing in pairings {
        match pairing {
            FilePairing::Paired { old, new } => {
                println!();
                println!("diff {} {}", old.display(), new.display());
                differences += diff_files(args, session, &old, &[new]);
                newline = true;
            }
            FilePairing::OnlyInOld(path) => {
                if std::mem::take(&mut newline) {
                    println!();
                }
                println!("Only in OLD: {}", path.display());
            }
            FilePairing::OnlyInNew(path) => {
                if std::mem::take(&mut newline) {
                    println!();
                }
                println!("Only in NEW: {}", path.display());
            }
        }
    }
    Ok(differences)
}

fn diff_files(args: &DiffArgs, session: &mut Session, old: &Path, new: &[PathBuf]) -> usize {
    let start = Instant::now();
    log_op_start!("diff_files", path = %old.display());

    let mut first = session.new_catalogue();
    session.load_into(&mut first, old);
    let mut second = session.new_catalogue();
    for path in new {
        session.load_into(&mut second, path);
    }

    let sensitivity = TypeSensitivity::from(args.type_format);
    let comparator = ClassComparator::new(sensitivity);

    let differences = if args.json {
        let mut log = EventLog::default();
        let differences = comparator.compare_catalogues(&first, &second, &mut log);
        let document = serde_json::json!({
            "old": [old.display().to_string()],
            "new": new.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
            "differences": differences,
            "events": log.records(),
        });
        match serde_json::to_string_pretty(&document) {
            Ok(text) => println!("{}", text),
            Err(e) => session.report_error(
                &ExError::new(ExErrorKind::Serialization)
                    .with_op("diff")
                    .with_message(e.to_string()),
            ),
        }
        differences
    } else {
        let mut report = ConsoleReport::new(sensitivity, session.simplifier());
        let differences = comparator.compare_catalogues(&first, &second, &mut report);
        print!("{}", report.output());
        let old_paths = [old.display().to_string()];
        let new_paths: Vec<String> = new.iter().map(|p| p.display().to_string()).collect();
        print!("{}", report.summary(&old_paths[..], &new_paths[..]));
        differences
    };

    log_op_end!(
        "diff_files",
        duration_ms = start.elapsed().as_millis() as u64,
        differences = differences
    );
    differences
}
