//! A virtual tree over a directory hierarchy.
//!
//! Nodes are `PathBuf`s. Nothing is scanned up front: `children_of` lists one
//! directory when asked, `parent_of` is `Path::parent` stopped at the root.
//! Symlinks are leaves, even when they point to a directory.

use std::fs;
use std::path::{Path, PathBuf};

use pathdiff::diff_paths;
use tracing::{instrument, warn};
use walkdir::WalkDir;

use crate::config::Settings;
use crate::errors::{TreeError, TreeResult};
use crate::util::path::PathExt;
use crate::view::TreeView;

/// Builds the tree rooted at the canonical form of `root`.
#[instrument(level = "debug", skip(settings))]
pub fn directory_tree(root: &Path, settings: &Settings) -> TreeResult<TreeView<PathBuf>> {
    if !root.exists() {
        return Err(TreeError::FileNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(TreeError::NotADirectory(root.to_path_buf()));
    }
    let root = root.to_canonical()?;

    let parent_root = root.clone();
    let children_root = root.clone();
    let show_hidden = settings.show_hidden;
    let max_depth = settings.max_depth;

    let view = TreeView::with_root(root)
        .with_parent(move |node: &PathBuf| {
            if node == &parent_root {
                None
            } else {
                node.parent().map(Path::to_path_buf)
            }
        })
        .with_children(move |node: &PathBuf| {
            if !is_real_dir(node) {
                return Vec::new();
            }
            if let Some(max) = max_depth {
                let level = node
                    .strip_prefix(&children_root)
                    .map(|rel| rel.components().count())
                    .unwrap_or(0);
                if level >= max {
                    return Vec::new();
                }
            }
            WalkDir::new(node)
                .min_depth(1)
                .max_depth(1)
                .follow_links(false)
                .follow_root_links(false)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|entry| match entry {
                    Ok(entry) => Some(entry.into_path()),
                    Err(e) => {
                        warn!("skipping unreadable entry below {}: {}", node.display(), e);
                        None
                    }
                })
                .filter(|path| show_hidden || !path.is_hidden())
                .collect()
        });

    Ok(view)
}

/// A directory that is not reached through a symlink.
fn is_real_dir(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|meta| meta.file_type().is_dir())
        .unwrap_or(false)
}

/// Resolves a path argument to a node of a directory tree.
pub fn resolve_node(path: &Path) -> TreeResult<PathBuf> {
    if !path.exists() {
        return Err(TreeError::FileNotFound(path.to_path_buf()));
    }
    path.to_canonical()
}

/// Formats a node for output, relative to `root` when requested.
pub fn display_node(node: &Path, root: &Path, relative: bool) -> String {
    if relative {
        match diff_paths(node, root) {
            Some(rel) if rel.as_os_str().is_empty() => ".".to_string(),
            Some(rel) => rel.display().to_string(),
            None => node.display().to_string(),
        }
    } else {
        node.display().to_string()
    }
}
