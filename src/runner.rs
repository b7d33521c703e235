// src/runner.rs
use std::error::Error;
use std::path::PathBuf;

use log::{error, info, warn};
use reqwest::blocking::Client;

use crate::{
    core::net,
    file::{csv_path, html_path, write_text},
    params::{Params, Source},
    progress::Progress,
    specs::results,
};

/// Summary of what was produced.
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    pub pages_failed: usize,
    pub skipped_cells: usize,
}

/// Top-level runner: pull each source through fetch → extract → write.
/// A page that fails to load or parse is logged and skipped; the run
/// carries on with the remaining sources.
pub fn run(
    params: &Params,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    if params.sources.is_empty() {
        return Err("No sources to process".into());
    }

    // Only URL sources need a client.
    let client = if params.sources.iter().any(|s| matches!(s, Source::Url { .. })) {
        Some(net::client()?)
    } else {
        None
    };

    if let Some(p) = progress.as_deref_mut() {
        p.begin(params.sources.len());
    }

    let mut written = Vec::new();
    let mut pages_failed = 0usize;
    let mut skipped_cells = 0usize;

    for source in &params.sources {
        let name = source.name();

        let html_doc = match load_source(client.as_ref(), source) {
            Ok(text) => text,
            Err(e) => {
                error!("Failed to load results for {name}: {e}");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(&name);
                }
                pages_failed += 1;
                continue;
            }
        };

        // Keep the raw page next to the extracted data. Pages already on
        // disk are not copied again.
        if matches!(source, Source::Url { .. }) && !params.csv_only {
            let path = html_path(&params.out, &name);
            write_text(&path, &html_doc)?;
            written.push(path);
        }

        let extraction = match results::parse_doc(&html_doc) {
            Ok(x) => x,
            Err(e) => {
                error!("{name}: {e}");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(&name);
                }
                pages_failed += 1;
                continue;
            }
        };
        if extraction.skipped_cells > 0 {
            warn!(
                "{name}: {} cell(s) had an unusable nested table, left empty",
                extraction.skipped_cells
            );
            skipped_cells += extraction.skipped_cells;
        }

        let path = csv_path(&params.out, &name);
        write_text(&path, &extraction.to_csv())?;
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&name, &path);
        }
        written.push(path);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(RunSummary {
        files_written: written,
        pages_failed,
        skipped_cells,
    })
}

fn load_source(client: Option<&Client>, source: &Source) -> Result<String, Box<dyn Error>> {
    match source {
        Source::Url { name, url } => {
            info!("Fetching {name} from {url}");
            let client = client.expect("client built when url sources exist");
            Ok(net::fetch_page(client, url)?)
        }
        Source::File(path) => Ok(std::fs::read_to_string(path)?),
    }
}
