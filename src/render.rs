use termtree::Tree;
use tracing::instrument;

use crate::view::TreeView;

/// A node whose children are still being rendered.
struct Frame<N> {
    tree: Tree<String>,
    pending: std::vec::IntoIter<N>,
    level: usize,
}

pub trait ToTermTree<N> {
    /// Renders the subtree of `from`, labelling each node with `label`.
    /// Nodes deeper than `max_depth` levels below `from` are left out.
    fn to_term_tree<L>(&self, from: &N, max_depth: Option<usize>, label: L) -> Tree<String>
    where
        L: Fn(&N) -> String;
}

impl<N> ToTermTree<N> for TreeView<N> {
    #[instrument(level = "debug", skip_all, fields(max_depth = ?max_depth))]
    fn to_term_tree<L>(&self, from: &N, max_depth: Option<usize>, label: L) -> Tree<String>
    where
        L: Fn(&N) -> String,
    {
        let open = |node: &N, level: usize| {
            let children = if max_depth.map_or(true, |max| level < max) {
                self.children(node)
            } else {
                Vec::new()
            };
            Frame {
                tree: Tree::new(label(node)),
                pending: children.into_iter(),
                level,
            }
        };

        // root frame stays outside the stack, finished frames attach to their parent
        let mut root = open(from, 0);
        let mut stack: Vec<Frame<N>> = Vec::new();
        loop {
            let top = match stack.last_mut() {
                Some(frame) => frame,
                None => &mut root,
            };
            match top.pending.next() {
                Some(child) => {
                    let level = top.level + 1;
                    stack.push(open(&child, level));
                }
                None => match stack.pop() {
                    Some(done) => {
                        let parent = match stack.last_mut() {
                            Some(frame) => frame,
                            None => &mut root,
                        };
                        parent.tree.push(done.tree);
                    }
                    None => return root.tree,
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> TreeView<&'static str> {
        TreeView::with_root("root").with_children(|n: &&'static str| match *n {
            "root" => vec!["a", "b"],
            "a" => vec!["a1"],
            _ => vec![],
        })
    }

    #[test]
    fn given_small_tree_when_rendering_then_all_levels_are_shown() {
        let rendered = small().to_term_tree(&"root", None, |n| n.to_string()).to_string();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines, vec!["root", "├── a", "│   └── a1", "└── b"]);
    }

    #[test]
    fn given_very_deep_chain_when_rendering_then_no_stack_overflow() {
        let view = TreeView::with_root(0_u32)
            .with_children(|n: &u32| if *n < 200_000 { vec![n + 1] } else { vec![] });

        let tree = view.to_term_tree(&0, None, |n| n.to_string());

        let mut depth = 1;
        let mut current = &tree;
        while let Some(child) = current.leaves.first() {
            depth += 1;
            current = child;
        }
        assert_eq!(depth, 200_001);
        assert_eq!(current.root, "200000");
        // termtree drops nested trees recursively
        std::mem::forget(tree);
    }

    #[test]
    fn given_depth_limit_when_rendering_then_deeper_nodes_are_cut() {
        let rendered = small().to_term_tree(&"root", Some(1), |n| n.to_string()).to_string();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines, vec!["root", "├── a", "└── b"]);
    }
}
