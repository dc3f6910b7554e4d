//! Shared trees for integration tests.
#![allow(dead_code)]

use abstree::util::testing;
use abstree::TreeView;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

/// Parent of a path string is the string without its last character; "" is the root.
pub fn drop_last(n: &String) -> Option<String> {
    if n.is_empty() {
        None
    } else {
        let mut parent = n.clone();
        parent.pop();
        Some(parent)
    }
}

/// Just the root `26`, no relations.
pub fn single_root() -> TreeView<i64> {
    TreeView::with_root(26)
}

/// "" -> "X" -> "XX" -> ... -> "XXXXX"
pub fn chain() -> TreeView<String> {
    TreeView::with_root(String::new())
        .with_parent(drop_last)
        .with_children(|n: &String| {
            if n.len() < 5 {
                vec![format!("{n}X")]
            } else {
                vec![]
            }
        })
}

/// 3-ary tree of depth 3: children of `n` are `nA`, `nB`, `nC` while `len(n) < 3`.
pub fn abc() -> TreeView<String> {
    TreeView::with_root(String::new())
        .with_parent(drop_last)
        .with_children(|n: &String| {
            if n.len() < 3 {
                vec![format!("{n}A"), format!("{n}B"), format!("{n}C")]
            } else {
                vec![]
            }
        })
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// Helper function for cross-platform path comparison
pub fn normalize_path_separator(s: &str) -> String {
    s.replace('\\', "/")
}
