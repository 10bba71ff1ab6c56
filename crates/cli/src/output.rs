use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Print `value` as pretty JSON and, if `out` is set, also write it there.
pub fn emit<T: Serialize>(value: &T, out: Option<&Path>) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    println!("{text}");
    if let Some(path) = out {
        let written = write_json(path, value)?;
        tracing::info!(path = %written.display(), "wrote");
    }
    Ok(())
}

/// Write `value` as pretty JSON to `path`, creating parent directories.
pub fn write_json<T: Serialize, P: AsRef<Path>>(path: P, value: &T) -> Result<PathBuf> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path.to_path_buf())
}
