// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::consts::DEFAULT_FILE;
use crate::error::{Error, Result};

/// Resolve the user's `--output` into a file path.
/// A trailing separator or an existing directory means "put `results.csv` in there".
pub fn resolve_out_path(out: &Path) -> Result<PathBuf> {
    if looks_like_dir_hint(out) || out.is_dir() {
        ensure_directory(out)?;
        return Ok(out.join(DEFAULT_FILE));
    }
    ensure_parent(out)?;
    Ok(out.to_path_buf())
}

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
