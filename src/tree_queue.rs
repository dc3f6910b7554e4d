use std::collections::VecDeque;
use std::iter::FusedIterator;

use tracing::instrument;

use crate::errors::{TreeError, TreeResult};
use crate::view::TreeView;

/// Lazy level-order (breadth-first) traversal driven by `children_of`.
pub struct BreadthFirst<'t, N> {
    view: &'t TreeView<N>,
    queue: VecDeque<N>,
}

impl<'t, N> BreadthFirst<'t, N> {
    #[instrument(level = "trace", skip_all)]
    pub(crate) fn new(view: &'t TreeView<N>, start: Option<N>) -> Self {
        Self {
            view,
            queue: start.into_iter().collect(),
        }
    }

    pub fn has_next(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Like `next`, but reports exhaustion as [`TreeError::Exhausted`].
    pub fn try_next(&mut self) -> TreeResult<N> {
        self.next().ok_or(TreeError::Exhausted)
    }
}

impl<'t, N> Iterator for BreadthFirst<'t, N> {
    type Item = N;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(self.view.children(&node));
        Some(node)
    }
}

impl<'t, N> FusedIterator for BreadthFirst<'t, N> {}

impl<N> TreeView<N> {
    /// Breadth-first traversal from the root; empty when the view has no root.
    pub fn traverse_breadth_first(&self) -> BreadthFirst<'_, N>
    where
        N: Clone,
    {
        BreadthFirst::new(self, self.root().cloned())
    }

    pub fn traverse_breadth_first_from(&self, node: N) -> BreadthFirst<'_, N> {
        BreadthFirst::new(self, Some(node))
    }

    /// Number of levels in the subtree of `node`, counting `node` itself.
    /// Each element in the queue is a pair (node, level).
    #[instrument(level = "debug", skip_all)]
    pub fn height_from(&self, node: N) -> usize {
        let mut max_level = 0;
        let mut queue = VecDeque::new();
        queue.push_back((node, 1));

        while let Some((node, level)) = queue.pop_front() {
            max_level = max_level.max(level);
            for child in self.children(&node) {
                queue.push_back((child, level + 1));
            }
        }

        max_level
    }

    /// Height of the whole tree, 0 for a rootless view.
    pub fn height(&self) -> usize
    where
        N: Clone,
    {
        self.root()
            .map(|root| self.height_from(root.clone()))
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary(limit: u32) -> TreeView<u32> {
        TreeView::with_root(1).with_children(move |n: &u32| {
            [2 * n, 2 * n + 1]
                .into_iter()
                .filter(|c| *c <= limit)
                .collect()
        })
    }

    #[test]
    fn given_heap_numbering_when_traversing_breadth_first_then_numbers_ascend() {
        let view = binary(15);
        let nodes: Vec<_> = view.traverse_breadth_first().collect();
        assert_eq!(nodes, (1..=15).collect::<Vec<_>>());
    }

    #[test]
    fn given_start_node_when_traversing_then_level_order_of_subtree() {
        let view = binary(15);
        let nodes: Vec<_> = view.traverse_breadth_first_from(3).collect();
        assert_eq!(nodes, vec![3, 6, 7, 12, 13, 14, 15]);
    }

    #[test]
    fn given_exhausted_iterator_when_pulling_then_error() {
        let view = binary(1);
        let mut it = view.traverse_breadth_first();
        assert_eq!(it.try_next().unwrap(), 1);
        assert!(!it.has_next());
        assert!(matches!(it.try_next(), Err(TreeError::Exhausted)));
    }

    #[test]
    fn given_trees_when_measuring_height_then_levels_are_counted() {
        assert_eq!(binary(15).height(), 4);
        assert_eq!(binary(16).height(), 5);
        assert_eq!(binary(15).height_from(7), 2);
        assert_eq!(TreeView::<u32>::new(None).height(), 0);
    }
}
