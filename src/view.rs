//! Tree definition: an optional root plus the two relations that shape the tree.
//!
//! Nothing about the structure is stored. Nodes are opaque caller values and the
//! tree exists only through `parent_of` and `children_of`, so it may be entirely
//! virtual (path strings, file system entries, computed ids).

use std::fmt;
use std::sync::Arc;

/// Relation returning the parent of a node, `None` for the terminal root.
pub type ParentFn<N> = Arc<dyn Fn(&N) -> Option<N> + Send + Sync>;

/// Relation returning the ordered, finite children of a node.
pub type ChildrenFn<N> = Arc<dyn Fn(&N) -> Vec<N> + Send + Sync>;

/// Immutable bundle of an optional root and the `parent_of`/`children_of` relations.
///
/// Views are never mutated; [`TreeView::with_parent`] and [`TreeView::with_children`]
/// produce new views sharing the unchanged parts.
pub struct TreeView<N> {
    root: Option<N>,
    parent_of: ParentFn<N>,
    children_of: ChildrenFn<N>,
}

impl<N: 'static> TreeView<N> {
    /// Creates a view with the given root, no parents and no children.
    pub fn new(root: Option<N>) -> Self {
        Self {
            root,
            parent_of: Arc::new(|_: &N| None),
            children_of: Arc::new(|_: &N| Vec::new()),
        }
    }

    pub fn with_root(root: N) -> Self {
        Self::new(Some(root))
    }
}

impl<N> TreeView<N> {
    /// Creates a view from all three parts at once.
    pub fn from_parts(root: Option<N>, parent_of: ParentFn<N>, children_of: ChildrenFn<N>) -> Self {
        Self {
            root,
            parent_of,
            children_of,
        }
    }

    pub fn root(&self) -> Option<&N> {
        self.root.as_ref()
    }

    pub fn parent(&self, node: &N) -> Option<N> {
        (self.parent_of)(node)
    }

    pub fn children(&self, node: &N) -> Vec<N> {
        (self.children_of)(node)
    }

    pub fn parent_fn(&self) -> &ParentFn<N> {
        &self.parent_of
    }

    pub fn children_fn(&self) -> &ChildrenFn<N> {
        &self.children_of
    }
}

impl<N: Clone> TreeView<N> {
    /// Returns a new view with `parent_of` replaced.
    pub fn with_parent<F>(&self, parent_of: F) -> Self
    where
        F: Fn(&N) -> Option<N> + Send + Sync + 'static,
    {
        Self {
            root: self.root.clone(),
            parent_of: Arc::new(parent_of),
            children_of: Arc::clone(&self.children_of),
        }
    }

    /// Returns a new view with `children_of` replaced.
    pub fn with_children<F>(&self, children_of: F) -> Self
    where
        F: Fn(&N) -> Vec<N> + Send + Sync + 'static,
    {
        Self {
            root: self.root.clone(),
            parent_of: Arc::clone(&self.parent_of),
            children_of: Arc::new(children_of),
        }
    }

    /// Returns a new view rooted at `root`, keeping both relations.
    pub fn rerooted(&self, root: Option<N>) -> Self {
        Self {
            root,
            parent_of: Arc::clone(&self.parent_of),
            children_of: Arc::clone(&self.children_of),
        }
    }
}

impl<N: Clone> Clone for TreeView<N> {
    fn clone(&self) -> Self {
        self.rerooted(self.root.clone())
    }
}

impl<N: 'static> Default for TreeView<N> {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<N: fmt::Debug> fmt::Debug for TreeView<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeView")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> TreeView<String> {
        TreeView::with_root(String::new())
            .with_parent(|n: &String| {
                if n.is_empty() {
                    None
                } else {
                    Some(n[..n.len() - 1].to_string())
                }
            })
            .with_children(|n: &String| {
                if n.len() < 5 {
                    vec![format!("{n}X")]
                } else {
                    vec![]
                }
            })
    }

    #[test]
    fn given_root_only_when_asking_relations_then_defaults_apply() {
        let view = TreeView::with_root(26_i64);
        assert_eq!(view.root(), Some(&26));
        assert_eq!(view.parent(&26), None);
        assert!(view.children(&26).is_empty());
    }

    #[test]
    fn given_view_when_replacing_parent_then_children_are_shared() {
        let original = chain();
        let replaced = original.with_parent(|_| None);

        assert!(Arc::ptr_eq(original.children_fn(), replaced.children_fn()));
        assert!(!Arc::ptr_eq(original.parent_fn(), replaced.parent_fn()));
        assert_eq!(original.parent(&"XX".to_string()), Some("X".to_string()));
        assert_eq!(replaced.parent(&"XX".to_string()), None);
    }

    #[test]
    fn given_view_when_replacing_children_then_original_is_untouched() {
        let original = chain();
        let replaced = original.with_children(|_| Vec::new());

        assert_eq!(original.children(&"X".to_string()), vec!["XX".to_string()]);
        assert!(replaced.children(&"X".to_string()).is_empty());
        assert!(Arc::ptr_eq(original.parent_fn(), replaced.parent_fn()));
    }

    #[test]
    fn given_relations_of_another_view_when_building_from_parts_then_they_are_shared() {
        let source = chain();
        let view = TreeView::from_parts(
            Some("X".to_string()),
            Arc::clone(source.parent_fn()),
            Arc::clone(source.children_fn()),
        );

        assert_eq!(view.root(), Some(&"X".to_string()));
        assert_eq!(view.parent(&"X".to_string()), Some(String::new()));
        assert!(Arc::ptr_eq(source.children_fn(), view.children_fn()));
    }

    #[test]
    fn given_missing_root_when_defaulting_then_root_is_none() {
        let view: TreeView<u32> = TreeView::default();
        assert!(view.root().is_none());
    }
}
