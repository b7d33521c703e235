// src/params.rs
use std::path::PathBuf;

use crate::config::consts::{DEFAULT_OUT_DIR, RESULTS_FILE_PREFIX};

/// One results page to process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    /// Fetch over HTTP; `name` becomes the output file stem.
    Url { name: String, url: String },
    /// Read a saved page from disk; the file stem names the output.
    File(PathBuf),
}

impl Source {
    /// Logical loto name: the URL label, or the file stem with the
    /// `resultados_` prefix peeled off (saved pages already carry it).
    pub fn name(&self) -> String {
        match self {
            Source::Url { name, .. } => name.clone(),
            Source::File(path) => {
                let stem = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| s!("results"));
                match stem.strip_prefix(RESULTS_FILE_PREFIX) {
                    Some(rest) if !rest.is_empty() => s!(rest),
                    _ => stem,
                }
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct Params {
    pub sources: Vec<Source>,        // pages to fetch/read, in order
    pub out: PathBuf,                // output root (html/ and csv/ below it)
    pub csv_only: bool,              // skip persisting raw HTML
}

impl Params {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            out: PathBuf::from(DEFAULT_OUT_DIR),
            csv_only: false,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
