use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::{DiTagError, Result};

/// Renames files inside one directory.
pub struct FileManager {
    directory: PathBuf,
}

impl FileManager {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn target_path(&self, file_name: &str) -> PathBuf {
        self.directory.join(file_name)
    }

    /// Fails if `target` exists and is a different file than `source`.
    ///
    /// A target that only differs in case from the source on a
    /// case-insensitive filesystem counts as the same file.
    pub fn check_target_free(&self, source: impl AsRef<Path>, target: impl AsRef<Path>) -> Result<()> {
        let (source, target) = (source.as_ref(), target.as_ref());
        if !target.exists() || is_same_file(source, target)? {
            return Ok(());
        }

        Err(DiTagError::filesystem(
            target,
            io::Error::new(io::ErrorKind::AlreadyExists, "target file already exists"),
        ))
    }

    /// Renames `source` to `file_name` in the managed directory.
    ///
    /// Returns the new path; a file already carrying that name is left alone.
    pub fn rename_to(&self, source: impl AsRef<Path>, file_name: &str) -> Result<PathBuf> {
        let source = source.as_ref();
        let target = self.target_path(file_name);

        if source.file_name() == target.file_name() && source.parent() == target.parent() {
            return Ok(target);
        }

        self.check_target_free(source, &target)?;
        fs::rename(source, &target).map_err(|e| DiTagError::filesystem(source, e))?;
        Ok(target)
    }

    /// Creates `path` and its parents unless it already is a directory.
    pub fn ensure_directory(path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::create_dir_all(path).map_err(|e| DiTagError::filesystem(path, e))?;
        Ok(())
    }
}

fn is_same_file(a: &Path, b: &Path) -> Result<bool> {
    let a = fs::canonicalize(a).map_err(|e| DiTagError::filesystem(a, e))?;
    let b = fs::canonicalize(b).map_err(|e| DiTagError::filesystem(b, e))?;
    Ok(a == b)
}
