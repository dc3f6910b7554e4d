//! Reduction of a node collection to its top nodes: the smallest antichain that
//! covers every input node by itself or by one of its ancestors.

use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

use tracing::{debug, instrument, trace};

use crate::sorted::SortedNodes;
use crate::view::TreeView;

/// A container of nodes that [`TreeView::filter_top_nodes`] can read and rebuild.
///
/// The implementation decides the container's kind: a sequence keeps insertion
/// order, a sorted set keeps its ordering, an unordered set stays unordered.
pub trait NodeCollection<N> {
    fn node_count(&self) -> usize;

    fn nodes<'a>(&'a self) -> Box<dyn Iterator<Item = &'a N> + 'a>
    where
        N: 'a;

    fn contains_node(&self, node: &N) -> bool;

    fn add_node(&mut self, node: N);

    fn clear_nodes(&mut self);

    /// Removes every node for which `dominated` holds and adds `node` once.
    /// Ordered sequences put `node` where the first removed node was.
    /// Returns the number of removed nodes.
    fn replace_nodes<F>(&mut self, node: N, dominated: F) -> usize
    where
        F: FnMut(&N) -> bool;

    /// An empty container of the same kind, with the same ordering or hashing.
    fn empty_like(&self) -> Self
    where
        Self: Sized;
}

impl<N: PartialEq> NodeCollection<N> for Vec<N> {
    fn node_count(&self) -> usize {
        self.len()
    }

    fn nodes<'a>(&'a self) -> Box<dyn Iterator<Item = &'a N> + 'a>
    where
        N: 'a,
    {
        Box::new(self.iter())
    }

    fn contains_node(&self, node: &N) -> bool {
        self.contains(node)
    }

    fn add_node(&mut self, node: N) {
        self.push(node);
    }

    fn clear_nodes(&mut self) {
        self.clear();
    }

    fn replace_nodes<F>(&mut self, node: N, mut dominated: F) -> usize
    where
        F: FnMut(&N) -> bool,
    {
        let before = self.len();
        let mut index = 0;
        let mut first_removed = None;
        self.retain(|kept| {
            let drop = dominated(kept);
            if drop && first_removed.is_none() {
                first_removed = Some(index);
            }
            index += 1;
            !drop
        });
        // everything before the first removed entry survived, so its index is still valid
        match first_removed {
            Some(pos) => self.insert(pos, node),
            None => self.push(node),
        }
        before + 1 - self.len()
    }

    fn empty_like(&self) -> Self {
        Vec::new()
    }
}

impl<N: Eq + Hash, S: BuildHasher + Clone> NodeCollection<N> for HashSet<N, S> {
    fn node_count(&self) -> usize {
        self.len()
    }

    fn nodes<'a>(&'a self) -> Box<dyn Iterator<Item = &'a N> + 'a>
    where
        N: 'a,
    {
        Box::new(self.iter())
    }

    fn contains_node(&self, node: &N) -> bool {
        self.contains(node)
    }

    fn add_node(&mut self, node: N) {
        self.insert(node);
    }

    fn clear_nodes(&mut self) {
        self.clear();
    }

    fn replace_nodes<F>(&mut self, node: N, mut dominated: F) -> usize
    where
        F: FnMut(&N) -> bool,
    {
        let before = self.len();
        self.retain(|kept| !dominated(kept));
        let removed = before - self.len();
        self.insert(node);
        removed
    }

    fn empty_like(&self) -> Self {
        HashSet::with_hasher(self.hasher().clone())
    }
}

impl<N: Ord> NodeCollection<N> for BTreeSet<N> {
    fn node_count(&self) -> usize {
        self.len()
    }

    fn nodes<'a>(&'a self) -> Box<dyn Iterator<Item = &'a N> + 'a>
    where
        N: 'a,
    {
        Box::new(self.iter())
    }

    fn contains_node(&self, node: &N) -> bool {
        self.contains(node)
    }

    fn add_node(&mut self, node: N) {
        self.insert(node);
    }

    fn clear_nodes(&mut self) {
        self.clear();
    }

    fn replace_nodes<F>(&mut self, node: N, mut dominated: F) -> usize
    where
        F: FnMut(&N) -> bool,
    {
        let before = self.len();
        self.retain(|kept| !dominated(kept));
        let removed = before - self.len();
        self.insert(node);
        removed
    }

    fn empty_like(&self) -> Self {
        BTreeSet::new()
    }
}

impl<N> NodeCollection<N> for SortedNodes<N> {
    fn node_count(&self) -> usize {
        self.len()
    }

    fn nodes<'a>(&'a self) -> Box<dyn Iterator<Item = &'a N> + 'a>
    where
        N: 'a,
    {
        Box::new(self.iter())
    }

    fn contains_node(&self, node: &N) -> bool {
        self.contains(node)
    }

    fn add_node(&mut self, node: N) {
        self.insert(node);
    }

    fn clear_nodes(&mut self) {
        self.clear();
    }

    fn replace_nodes<F>(&mut self, node: N, mut dominated: F) -> usize
    where
        F: FnMut(&N) -> bool,
    {
        let before = self.len();
        self.retain(|kept| !dominated(kept));
        let removed = before - self.len();
        self.insert(node);
        removed
    }

    fn empty_like(&self) -> Self {
        SortedNodes::empty_like(self)
    }
}

impl<N: Clone + Eq + Hash> TreeView<N> {
    /// Reduces `nodes` to the smallest antichain covering all of them.
    ///
    /// Every input node ends up either in the result or below one of its
    /// nodes, and no result node is an ancestor of another. The result has
    /// the same container kind as the input. Inputs with fewer than two
    /// nodes, and inputs that need no filtering, are returned unchanged.
    ///
    /// Costs `O(m·h)` when ancestors precede their descendants in `nodes`,
    /// up to `O(m²·h)` when descendants come first (`m` nodes, height `h`),
    /// independent of the size of the tree.
    pub fn filter_top_nodes<C>(&self, nodes: C) -> C
    where
        C: NodeCollection<N>,
    {
        self.filter_top_nodes_with(nodes, C::empty_like)
    }

    /// Like [`TreeView::filter_top_nodes`], with an explicit factory for the
    /// (empty) result container.
    #[instrument(level = "debug", skip_all, fields(input = nodes.node_count()))]
    pub fn filter_top_nodes_with<C, F>(&self, nodes: C, make_empty: F) -> C
    where
        C: NodeCollection<N>,
        F: FnOnce(&C) -> C,
    {
        if nodes.node_count() < 2 {
            return nodes;
        }

        // union of the root paths of every accepted node
        let mut ancestors: HashSet<N> = HashSet::new();
        // mirrors `result`, whose own lookup may be linear
        let mut accepted: HashSet<N> = HashSet::new();
        let mut result = make_empty(&nodes);
        debug_assert_eq!(result.node_count(), 0, "result container must start empty");

        for node in nodes.nodes() {
            let path = self.path_to_root(node);

            if path.len() == 1 {
                // the terminal root covers everything else
                trace!("root found, stopping");
                result.clear_nodes();
                result.add_node(node.clone());
                accepted.clear();
                accepted.insert(node.clone());
                break;
            }

            if ancestors.is_empty() {
                ancestors.extend(path);
                result.add_node(node.clone());
                accepted.insert(node.clone());
                continue;
            }

            if path.iter().any(|step| accepted.contains(step)) {
                trace!("dominated node skipped");
                continue;
            }

            if ancestors.contains(node) {
                // some accepted nodes lie below this one
                let removed = result.replace_nodes(node.clone(), |kept| {
                    let below = self.node_is_ancestor(node, kept);
                    if below {
                        accepted.remove(kept);
                    }
                    below
                });
                accepted.insert(node.clone());
                trace!(removed, "descendants absorbed");
                continue;
            }

            ancestors.extend(path);
            result.add_node(node.clone());
            accepted.insert(node.clone());
        }

        debug!(output = result.node_count(), "filtered top nodes");
        if result.node_count() < nodes.node_count() {
            result
        } else {
            nodes
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> TreeView<String> {
        TreeView::with_root(String::new()).with_parent(|n: &String| {
            if n.is_empty() {
                None
            } else {
                Some(n[..n.len() - 1].to_string())
            }
        })
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn given_vec_when_replacing_then_first_removed_position_is_reused() {
        let mut nodes = strings(&["a", "XY", "b", "XZ", "c"]);
        let removed = nodes.replace_nodes("X".to_string(), |n| n.starts_with('X'));
        assert_eq!(removed, 2);
        assert_eq!(nodes, strings(&["a", "X", "b", "c"]));
    }

    #[test]
    fn given_vec_when_nothing_matches_then_node_is_appended() {
        let mut nodes = strings(&["a", "b"]);
        let removed = nodes.replace_nodes("X".to_string(), |_| false);
        assert_eq!(removed, 0);
        assert_eq!(nodes, strings(&["a", "b", "X"]));
    }

    #[test]
    fn given_duplicates_when_filtering_then_one_copy_remains() {
        let view = chain();
        let result = view.filter_top_nodes(strings(&["XX", "XX", "XXX"]));
        assert_eq!(result, strings(&["XX"]));
    }

    #[test]
    fn given_descendants_first_when_filtering_then_ancestor_takes_first_slot() {
        let view = chain();
        let result = view.filter_top_nodes(strings(&["XXXX", "YY", "XXX", "XX"]));
        assert_eq!(result, strings(&["XX", "YY"]));
    }

    /// A sequence that counts membership lookups.
    #[derive(Default)]
    struct Counted {
        items: Vec<String>,
        lookups: std::cell::Cell<usize>,
    }

    impl NodeCollection<String> for Counted {
        fn node_count(&self) -> usize {
            self.items.len()
        }

        fn nodes<'a>(&'a self) -> Box<dyn Iterator<Item = &'a String> + 'a>
        where
            String: 'a,
        {
            Box::new(self.items.iter())
        }

        fn contains_node(&self, node: &String) -> bool {
            self.lookups.set(self.lookups.get() + 1);
            self.items.contains(node)
        }

        fn add_node(&mut self, node: String) {
            self.items.push(node);
        }

        fn clear_nodes(&mut self) {
            self.items.clear();
        }

        fn replace_nodes<F>(&mut self, node: String, dominated: F) -> usize
        where
            F: FnMut(&String) -> bool,
        {
            self.items.replace_nodes(node, dominated)
        }

        fn empty_like(&self) -> Self {
            Counted::default()
        }
    }

    #[test]
    fn given_many_siblings_when_filtering_then_result_is_never_scanned() {
        let view = chain();
        let mut items: Vec<String> = (0..500).map(|i| format!("X{i:03}")).collect();
        items.push("X000Y".to_string());
        let input = Counted {
            items,
            ..Counted::default()
        };

        let result = view.filter_top_nodes(input);

        assert_eq!(result.items.len(), 500);
        assert_eq!(result.lookups.get(), 0);
    }

    #[test]
    fn given_custom_factory_when_filtering_then_factory_container_is_used() {
        let view = chain();
        let mut calls = 0;
        let result = view.filter_top_nodes_with(strings(&["XXX", "X"]), |_| {
            calls += 1;
            Vec::with_capacity(8)
        });
        assert_eq!(calls, 1);
        assert_eq!(result, strings(&["X"]));
    }
}
