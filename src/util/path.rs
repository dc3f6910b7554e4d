use std::path::{Path, PathBuf};

use crate::errors::{TreeError, TreeResult};

pub trait PathExt {
    fn to_canonical(&self) -> TreeResult<PathBuf>;
    fn is_hidden(&self) -> bool;
}

impl PathExt for Path {
    fn to_canonical(&self) -> TreeResult<PathBuf> {
        self.canonicalize()
            .map_err(|e| TreeError::PathResolution {
                path: self.to_path_buf(),
                reason: e.to_string(),
            })
    }

    /// Dotfiles and dot-directories.
    fn is_hidden(&self) -> bool {
        self.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with('.'))
    }
}

/// Expand `~`, `$VAR` and `${VAR}` in a path argument.
pub fn expand_path(path: &str) -> PathBuf {
    shellexpand::full(path)
        .map(|s| PathBuf::from(s.into_owned()))
        .unwrap_or_else(|_| PathBuf::from(path))
}
