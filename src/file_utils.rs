use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::errors::DocumentError;

// @module: Input discovery and output directories

/// Filesystem helpers for locating the article and preparing the report path
pub struct FileManager;

impl FileManager {
    /// True for an existing regular file
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
    }

    /// True for an existing directory
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
    }

    /// Create `path` with all missing parents; an existing directory is fine
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))
    }

    /// `.docx` files directly inside `dir`, sorted by file name.
    ///
    /// Word lock files (`~$name.docx`) are skipped.
    pub fn find_docx_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>, DocumentError> {
        let dir = dir.as_ref();
        if !Self::dir_exists(dir) {
            return Err(DocumentError::NoInputFile(dir.display().to_string()));
        }

        let mut result: Vec<PathBuf> = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.into_path())
            .filter(|path| path.is_file() && is_docx(path))
            .collect();
        result.sort();

        Ok(result)
    }

    /// The first `.docx` file in `dir`
    pub fn first_docx<P: AsRef<Path>>(dir: P) -> Result<PathBuf, DocumentError> {
        let dir = dir.as_ref();
        Self::find_docx_files(dir)?
            .into_iter()
            .next()
            .ok_or_else(|| DocumentError::NoInputFile(dir.display().to_string()))
    }
}

fn is_docx(path: &Path) -> bool {
    let is_lock_file = path
        .file_name()
        .map(|name| name.to_string_lossy().starts_with("~$"))
        .unwrap_or(false);
    let has_extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case("docx"))
        .unwrap_or(false);
    has_extension && !is_lock_file
}
