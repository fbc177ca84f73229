//! ImageSource boundary: folder enumeration and MIME tagging. The
//! controller does the actual `image/` filtering.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use quiz_core::SourceFile;

const FALLBACK_TYPE_TAG: &str = "application/octet-stream";

pub fn type_tag_for_path(path: &Path) -> &'static str {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or(FALLBACK_TYPE_TAG)
}

/// Enumerate the regular files of `dir`, sorted by file name so the quiz
/// input order is stable across platforms.
pub fn collect_source_files(dir: &Path) -> Result<Vec<SourceFile<PathBuf>>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read folder {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("failed to scan folder {}", dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        // Skip names that are not valid UTF-8; they cannot be guessed.
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        files.push(SourceFile {
            name: name.to_string(),
            type_tag: type_tag_for_path(&path).to_string(),
            handle: path.clone(),
        });
    }
    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}
