//! File lister: snapshot the working directory into the manifest.

use crate::report;
use eyre::{Context, Result};
use std::fs;
use std::path::Path;

/// Fixed manifest path, relative to the working directory.
pub const MANIFEST_NAME: &str = "list.txt";

/// Entry names of the immediate directory, all entry types, enumeration order.
pub fn entry_names(dir: &Path) -> Result<Vec<String>> {
    let entries =
        fs::read_dir(dir).wrap_err_with(|| format!("failed to read directory {:?}", dir.display()))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.wrap_err("failed to read directory entry")?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }

    Ok(names)
}

/// Write the directory's entry names, newline-joined, to the manifest.
///
/// Overwrites any existing manifest. Returns the listed names.
pub fn create_list(dir: &Path) -> Result<Vec<String>> {
    let names = entry_names(dir)?;

    let manifest = dir.join(MANIFEST_NAME);
    fs::write(&manifest, names.join("\n"))
        .wrap_err_with(|| format!("failed to write {:?}", manifest.display()))?;

    tracing::info!(manifest = ?manifest.display(), entries = names.len(), "wrote file list");
    report::created_list();

    Ok(names)
}
