use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use walkdir::WalkDir;

/// Resolve `path` to the list of feed files to read.
///
/// Behavior:
/// - A file path is returned as-is (any extension).
/// - A directory is walked recursively for `*.json` files, returned in lexicographic order.
pub fn discover_feed_files(path: &Utf8Path) -> anyhow::Result<Vec<Utf8PathBuf>> {
    let meta = std::fs::metadata(path).with_context(|| format!("stat {}", path))?;
    if meta.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut out: Vec<Utf8PathBuf> = Vec::new();
    for entry in WalkDir::new(path) {
        let entry = entry.with_context(|| format!("walk {}", path))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(file) = Utf8PathBuf::from_path_buf(entry.path().to_path_buf()) else {
            tracing::warn!(path = ?entry.path(), "skipping non-UTF-8 path");
            continue;
        };
        if file.extension() == Some("json") {
            out.push(file);
        }
    }

    // Stable order.
    out.sort();

    Ok(out)
}
