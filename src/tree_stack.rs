/*
Stack based depth-first traversal.

No recursion: every level still being walked is represented by the iterator over
its remaining siblings, suspended on an explicit stack. Descending pushes the
active sibling iterator, exhausting a level pops the next one. Tree depth is
therefore bounded by heap memory, not by the call stack.
 */
use std::iter::FusedIterator;
use std::vec;

use tracing::instrument;

use crate::errors::{TreeError, TreeResult};
use crate::view::TreeView;

/// Lazy preorder (depth-first) traversal driven by `children_of`.
///
/// Children are fetched only when the traversal leaves their parent, so a
/// partially consumed iterator has touched only the nodes it emitted.
pub struct DepthFirst<'t, N> {
    view: &'t TreeView<N>,
    /// The node the next call emits, `None` once exhausted.
    current: Option<N>,
    /// Remaining siblings of `current`.
    siblings: Option<vec::IntoIter<N>>,
    /// Suspended sibling iterators of the ancestor levels.
    stack: Vec<vec::IntoIter<N>>,
}

impl<'t, N> DepthFirst<'t, N> {
    #[instrument(level = "trace", skip_all)]
    pub(crate) fn new(view: &'t TreeView<N>, start: Option<N>) -> Self {
        Self {
            view,
            current: start,
            siblings: None,
            stack: Vec::new(),
        }
    }

    pub fn has_next(&self) -> bool {
        self.current.is_some()
    }

    /// The node the next call to `next` returns.
    pub fn peek(&self) -> Option<&N> {
        self.current.as_ref()
    }

    /// Like `next`, but reports exhaustion as [`TreeError::Exhausted`].
    pub fn try_next(&mut self) -> TreeResult<N> {
        self.next().ok_or(TreeError::Exhausted)
    }

    fn advance_from(&mut self, emitted: &N) {
        let mut children = self.view.children(emitted).into_iter();
        if let Some(first) = children.next() {
            // enter into the lower level
            if let Some(active) = self.siblings.replace(children) {
                self.stack.push(active);
            }
            self.current = Some(first);
        } else if let Some(sibling) = self.siblings.as_mut().and_then(Iterator::next) {
            self.current = Some(sibling);
        } else {
            // return to the upper levels
            self.current = None;
            while let Some(mut pending) = self.stack.pop() {
                if let Some(next) = pending.next() {
                    self.current = Some(next);
                    self.siblings = Some(pending);
                    break;
                }
            }
        }
    }
}

impl<'t, N> Iterator for DepthFirst<'t, N> {
    type Item = N;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current.take()?;
        self.advance_from(&node);
        Some(node)
    }
}

impl<'t, N> FusedIterator for DepthFirst<'t, N> {}

impl<N> TreeView<N> {
    /// Depth-first traversal from the root; empty when the view has no root.
    pub fn traverse_depth_first(&self) -> DepthFirst<'_, N>
    where
        N: Clone,
    {
        DepthFirst::new(self, self.root().cloned())
    }

    pub fn traverse_depth_first_from(&self, node: N) -> DepthFirst<'_, N> {
        DepthFirst::new(self, Some(node))
    }

    /// Nodes without children below (and including) `node`, in preorder.
    #[instrument(level = "debug", skip_all)]
    pub fn leaf_nodes_from(&self, node: N) -> Vec<N> {
        let mut leaves = Vec::new();
        let mut stack = vec![node];

        while let Some(node) = stack.pop() {
            let children = self.children(&node);
            if children.is_empty() {
                leaves.push(node);
            } else {
                // reversed, so the leftmost child is popped first
                stack.extend(children.into_iter().rev());
            }
        }

        leaves
    }

    pub fn leaf_nodes(&self) -> Vec<N>
    where
        N: Clone,
    {
        match self.root() {
            Some(root) => self.leaf_nodes_from(root.clone()),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // root
    // ├── a
    // │   └── a1
    // ├── b
    // └── c
    //     ├── c1
    //     └── c2
    fn small() -> TreeView<&'static str> {
        TreeView::with_root("root").with_children(|n: &&'static str| match *n {
            "root" => vec!["a", "b", "c"],
            "a" => vec!["a1"],
            "c" => vec!["c1", "c2"],
            _ => vec![],
        })
    }

    #[test]
    fn given_small_tree_when_traversing_depth_first_then_preorder() {
        let view = small();
        let nodes: Vec<_> = view.traverse_depth_first().collect();
        assert_eq!(nodes, vec!["root", "a", "a1", "b", "c", "c1", "c2"]);
    }

    #[test]
    fn given_subtree_start_when_traversing_then_only_subtree_is_visited() {
        let view = small();
        let nodes: Vec<_> = view.traverse_depth_first_from("c").collect();
        assert_eq!(nodes, vec!["c", "c1", "c2"]);
    }

    #[test]
    fn given_exhausted_iterator_when_pulling_then_exhausted_error_repeats() {
        let view = TreeView::with_root(26_i64);
        let mut it = view.traverse_depth_first();
        assert!(it.has_next());
        assert_eq!(it.peek(), Some(&26));
        assert_eq!(it.try_next().unwrap(), 26);
        assert!(!it.has_next());
        assert!(matches!(it.try_next(), Err(TreeError::Exhausted)));
        assert!(matches!(it.try_next(), Err(TreeError::Exhausted)));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn given_rootless_view_when_traversing_then_nothing_is_emitted() {
        let view: TreeView<u8> = TreeView::new(None);
        let mut it = view.traverse_depth_first();
        assert!(!it.has_next());
        assert!(it.try_next().is_err());
    }

    #[test]
    fn given_small_tree_when_collecting_leaves_then_preorder_leaves() {
        let view = small();
        assert_eq!(view.leaf_nodes(), vec!["a1", "b", "c1", "c2"]);
        assert_eq!(view.leaf_nodes_from("a"), vec!["a1"]);
    }

    #[test]
    fn given_very_deep_chain_when_traversing_then_no_stack_overflow() {
        let view = TreeView::with_root(0_u32)
            .with_children(|n: &u32| if *n < 200_000 { vec![n + 1] } else { vec![] });
        assert_eq!(view.traverse_depth_first().count(), 200_001);
        assert_eq!(view.leaf_nodes(), vec![200_000]);
    }
}
