pub mod diff;
pub mod print;

use actreader_core::errors::ExError;
use actreader_core::settings::Settings;
use actreader_core::{Catalogue, TypeNameSimplifier};
use actreader_store::errors::unsupported_input;
use actreader_store::snapshot::{is_snapshot_file, JsonSnapshotProvider};
use std::path::Path;

/// State shared by one command run
pub struct Session {
    settings: Settings,
    errors: usize,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            errors: 0,
        }
    }

    pub fn errors(&self) -> usize {
        self.errors
    }

    pub fn simplifier(&self) -> TypeNameSimplifier {
        TypeNameSimplifier::from_settings(&self.settings)
    }

    /// Print an error to stderr and count it
    pub fn report_error(&mut self, err: &ExError) {
        self.errors += 1;
        if err.message().is_empty() {
            eprintln!("ERROR: {}", err);
        } else {
            eprintln!("ERROR: {}", err.message());
        }
        if let Some(path) = err.path() {
            eprintln!("  {}", path);
        }
    }

    pub fn new_catalogue(&self) -> Catalogue {
        Catalogue::from_settings(&self.settings)
    }

    /// Add one snapshot file to `catalogue`, reporting any failure
    pub fn load_into(&mut self, catalogue: &mut Catalogue, path: &Path) {
        if !is_snapshot_file(path) {
            self.report_error(&unsupported_input(path));
            return;
        }
        if let Err(err) = catalogue.populate(&JsonSnapshotProvider::new(path)) {
            self.report_error(&err);
        }
    }
}
