// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::consts::{CSV_SUBDIR, HTML_SUBDIR, RESULTS_FILE_PREFIX};
use crate::core::sanitize::slug_filename;

/// Raw page copy: `<out>/html/resultados_<name>.html`, name kept as-is.
pub fn html_path(out: &Path, name: &str) -> PathBuf {
    out.join(HTML_SUBDIR)
        .join(format!("{RESULTS_FILE_PREFIX}{name}.html"))
}

/// Extracted records: `<out>/csv/<slug>.csv`. The slug covers the whole
/// stem, prefix included.
pub fn csv_path(out: &Path, name: &str) -> PathBuf {
    let stem = slug_filename(&join_stem(name));
    out.join(CSV_SUBDIR).join(format!("{stem}.csv"))
}

fn join_stem(name: &str) -> String {
    format!("{RESULTS_FILE_PREFIX}{name}")
}

/// Create parent directories as needed, then write the whole file.
pub fn write_text(path: &Path, contents: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
