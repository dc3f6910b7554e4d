//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Explore a directory as a virtual tree: traversals, root paths, common ancestors, top nodes
#[derive(Parser, Debug)]
#[command(name = "abstree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Tree root directory (default: cwd)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Print paths relative to the root
    #[arg(short, long, global = true)]
    pub relative: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the tree depth-first (preorder)
    Dfs {
        /// Start node (default: root)
        #[arg(value_hint = ValueHint::AnyPath)]
        from: Option<PathBuf>,
    },

    /// List the tree breadth-first (level order)
    Bfs {
        /// Start node (default: root)
        #[arg(value_hint = ValueHint::AnyPath)]
        from: Option<PathBuf>,
    },

    /// Show the tree
    Tree {
        /// Start node (default: root)
        #[arg(value_hint = ValueHint::AnyPath)]
        from: Option<PathBuf>,
    },

    /// List leaf nodes
    Leaves {
        /// Start node (default: root)
        #[arg(value_hint = ValueHint::AnyPath)]
        from: Option<PathBuf>,
    },

    /// Show the path from the root to a node
    Path {
        #[arg(value_hint = ValueHint::AnyPath)]
        node: PathBuf,
    },

    /// Show the nearest common ancestor of two nodes
    Common {
        #[arg(value_hint = ValueHint::AnyPath)]
        a: PathBuf,
        #[arg(value_hint = ValueHint::AnyPath)]
        b: PathBuf,
    },

    /// Reduce nodes to their top nodes (no node below another)
    Top {
        #[arg(num_args = 1.., value_hint = ValueHint::AnyPath)]
        nodes: Vec<PathBuf>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings
    Show,
    /// Show config file locations
    Path,
    /// Print a template config file
    Template,
}
