//! Root paths and ancestor queries, built on `parent_of` alone.

use tracing::instrument;

use crate::view::TreeView;

impl<N: Clone + PartialEq> TreeView<N> {
    /// Returns `[node, parent(node), grandparent(node), ...]` up to the parentless terminal.
    ///
    /// Does not terminate if the parent chain is cyclic.
    #[instrument(level = "trace", skip_all)]
    pub fn path_to_root(&self, node: &N) -> Vec<N> {
        let mut path = vec![node.clone()];
        let mut current = self.parent(node);
        while let Some(parent) = current {
            current = self.parent(&parent);
            path.push(parent);
        }
        path
    }

    /// Returns the root path ordered from the terminal root down to `node`.
    #[instrument(level = "trace", skip_all)]
    pub fn path_from_root(&self, node: &N) -> Vec<N> {
        let mut path = self.path_to_root(node);
        if path.len() > 1 {
            path.reverse();
        }
        path
    }

    /// Number of edges between `node` and its terminal root.
    pub fn depth_of(&self, node: &N) -> usize {
        self.path_to_root(node).len() - 1
    }

    /// True if `ancestor` lies strictly above `descendant`. A node is never its own ancestor.
    #[instrument(level = "trace", skip_all)]
    pub fn node_is_ancestor(&self, ancestor: &N, descendant: &N) -> bool {
        let mut current = self.parent(descendant);
        while let Some(node) = current {
            if &node == ancestor {
                return true;
            }
            current = self.parent(&node);
        }
        false
    }

    /// Nearest node that is `a` or an ancestor of `a` and also `b` or an ancestor of `b`.
    ///
    /// Both nodes must share the same terminal root. Debug builds assert this;
    /// in release builds the result for nodes of different trees is unspecified
    /// (currently `None`). Costs `O(depth(a) + depth(b))`.
    #[instrument(level = "trace", skip_all)]
    pub fn common_ancestor(&self, a: &N, b: &N) -> Option<N> {
        if a == b {
            return Some(a.clone());
        }
        let path_a = self.path_to_root(a);
        let path_b = self.path_to_root(b);
        debug_assert!(
            path_a.last() == path_b.last(),
            "common_ancestor: nodes do not share a root"
        );

        let mut common = None;
        for (x, y) in path_a.iter().rev().zip(path_b.iter().rev()) {
            if x != y {
                break;
            }
            common = Some(x);
        }
        common.cloned()
    }

    /// Longest root path shared by `a` and `b`, ordered from the root.
    ///
    /// Same precondition as [`TreeView::common_ancestor`]; the release-build
    /// result for nodes of different trees is unspecified (currently empty).
    #[instrument(level = "trace", skip_all)]
    pub fn common_path_from_root(&self, a: &N, b: &N) -> Vec<N> {
        if a == b {
            return self.path_from_root(a);
        }
        let path_a = self.path_from_root(a);
        let path_b = self.path_from_root(b);
        debug_assert!(
            path_a.first() == path_b.first(),
            "common_path_from_root: nodes do not share a root"
        );

        let shared = path_a
            .iter()
            .zip(&path_b)
            .take_while(|(x, y)| x == y)
            .count();
        // one path may be a prefix of the other, then the shorter one is the answer
        let mut common = if path_a.len() <= path_b.len() {
            path_a
        } else {
            path_b
        };
        common.truncate(shared);
        common
    }
}
