//! Virtual trees defined by two relations over an opaque node type.
//!
//! A [`TreeView`] bundles an optional root with `parent_of` and `children_of`.
//! Nothing is stored: the library walks the relations on demand to provide
//! lazy depth-first and breadth-first traversals, root paths, ancestor and
//! common-ancestor queries, and [`TreeView::filter_top_nodes`], which reduces
//! a node collection to the minimal set of nodes covering it.
//!
//! ```
//! use abstree::TreeView;
//!
//! let tree = TreeView::with_root(String::new())
//!     .with_parent(|n: &String| (!n.is_empty()).then(|| n[..n.len() - 1].to_string()))
//!     .with_children(|n: &String| {
//!         if n.len() < 2 {
//!             vec![format!("{n}A"), format!("{n}B")]
//!         } else {
//!             vec![]
//!         }
//!     });
//!
//! let preorder: Vec<_> = tree.traverse_depth_first().collect();
//! assert_eq!(preorder, ["", "A", "AA", "AB", "B", "BA", "BB"]);
//! assert_eq!(tree.common_ancestor(&"AA".into(), &"AB".into()), Some("A".to_string()));
//! assert_eq!(tree.filter_top_nodes(vec!["AB".to_string(), "A".to_string()]), ["A"]);
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod exitcode;
pub mod fs_tree;
pub mod path;
pub mod render;
pub mod sorted;
pub mod top_nodes;
pub mod tree_queue;
pub mod tree_stack;
pub mod util;
pub mod view;

pub use errors::{TreeError, TreeResult};
pub use render::ToTermTree;
pub use sorted::SortedNodes;
pub use top_nodes::NodeCollection;
pub use tree_queue::BreadthFirst;
pub use tree_stack::DepthFirst;
pub use view::{ChildrenFn, ParentFn, TreeView};
