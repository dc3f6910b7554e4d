use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, local_config_path, Settings};
use crate::fs_tree::{directory_tree, display_node, resolve_node};
use crate::render::ToTermTree;
use crate::util::path::expand_path;
use crate::view::TreeView;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Dfs { from }) => _dfs(cli, from.as_deref()),
        Some(Commands::Bfs { from }) => _bfs(cli, from.as_deref()),
        Some(Commands::Tree { from }) => _tree(cli, from.as_deref()),
        Some(Commands::Leaves { from }) => _leaves(cli, from.as_deref()),
        Some(Commands::Path { node }) => _path(cli, node),
        Some(Commands::Common { a, b }) => _common(cli, a, b),
        Some(Commands::Top { nodes }) => _top(cli, nodes),
        Some(Commands::Config { command }) => _config(cli, command),
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => Ok(()),
    }
}

/// Directory tree plus the settings it was built with.
struct TreeContext {
    root: PathBuf,
    view: TreeView<PathBuf>,
    settings: Settings,
}

fn root_dir(cli: &Cli) -> CliResult<PathBuf> {
    match &cli.root {
        Some(root) => Ok(expand_path(&root.to_string_lossy())),
        None => std::env::current_dir().map_err(|source| CliError::Io {
            context: "cannot determine current directory".to_string(),
            source,
        }),
    }
}

impl TreeContext {
    fn open(cli: &Cli) -> CliResult<Self> {
        let dir = root_dir(cli)?;
        let mut settings = Settings::load(Some(&dir))?;
        if cli.relative {
            settings.relative_paths = true;
        }
        let view = directory_tree(&dir, &settings)?;
        let root = view
            .root()
            .cloned()
            .ok_or_else(|| CliError::InvalidArgs(format!("no tree at {}", dir.display())))?;
        debug!("tree root: {}", root.display());
        Ok(Self {
            root,
            view,
            settings,
        })
    }

    /// Resolves a path argument to a node of this tree.
    fn node(&self, path: &Path) -> CliResult<PathBuf> {
        let node = resolve_node(&expand_path(&path.to_string_lossy()))?;
        if !node.starts_with(&self.root) {
            return Err(CliError::InvalidArgs(format!(
                "{} is outside of {}",
                node.display(),
                self.root.display()
            )));
        }
        Ok(node)
    }

    fn start(&self, from: Option<&Path>) -> CliResult<PathBuf> {
        match from {
            Some(path) => self.node(path),
            None => Ok(self.root.clone()),
        }
    }

    fn show(&self, node: &Path) -> String {
        display_node(node, &self.root, self.settings.relative_paths)
    }
}

#[instrument(level = "debug", skip(cli))]
fn _dfs(cli: &Cli, from: Option<&Path>) -> CliResult<()> {
    let ctx = TreeContext::open(cli)?;
    let start = ctx.start(from)?;
    for node in ctx.view.traverse_depth_first_from(start) {
        output::info(&ctx.show(&node));
    }
    Ok(())
}

#[instrument(level = "debug", skip(cli))]
fn _bfs(cli: &Cli, from: Option<&Path>) -> CliResult<()> {
    let ctx = TreeContext::open(cli)?;
    let start = ctx.start(from)?;
    for node in ctx.view.traverse_breadth_first_from(start) {
        output::info(&ctx.show(&node));
    }
    Ok(())
}

#[instrument(level = "debug", skip(cli))]
fn _tree(cli: &Cli, from: Option<&Path>) -> CliResult<()> {
    let ctx = TreeContext::open(cli)?;
    let start = ctx.start(from)?;
    // depth is already limited by the view's children relation
    let tree = ctx.view.to_term_tree(&start, None, |node| {
        if node == &start {
            ctx.show(node)
        } else {
            node.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| ctx.show(node))
        }
    });
    output::info(&tree);
    Ok(())
}

#[instrument(level = "debug", skip(cli))]
fn _leaves(cli: &Cli, from: Option<&Path>) -> CliResult<()> {
    let ctx = TreeContext::open(cli)?;
    let start = ctx.start(from)?;
    for leaf in ctx.view.leaf_nodes_from(start) {
        output::info(&ctx.show(&leaf));
    }
    Ok(())
}

#[instrument(level = "debug", skip(cli))]
fn _path(cli: &Cli, node: &Path) -> CliResult<()> {
    let ctx = TreeContext::open(cli)?;
    let node = ctx.node(node)?;
    let path = ctx.view.path_from_root(&node);
    output::info(&path.iter().map(|step| ctx.show(step)).join(" -> "));
    Ok(())
}

#[instrument(level = "debug", skip(cli))]
fn _common(cli: &Cli, a: &Path, b: &Path) -> CliResult<()> {
    let ctx = TreeContext::open(cli)?;
    let a = ctx.node(a)?;
    let b = ctx.node(b)?;
    let common = ctx.view.common_ancestor(&a, &b).ok_or_else(|| {
        CliError::InvalidArgs(format!("{} and {} share no ancestor", a.display(), b.display()))
    })?;
    output::info(&ctx.show(&common));
    Ok(())
}

#[instrument(level = "debug", skip(cli))]
fn _top(cli: &Cli, nodes: &[PathBuf]) -> CliResult<()> {
    let ctx = TreeContext::open(cli)?;
    let nodes = nodes
        .iter()
        .map(|path| ctx.node(path))
        .collect::<CliResult<Vec<_>>>()?;
    let given = nodes.len();
    let top = ctx.view.filter_top_nodes(nodes);
    debug!("top nodes: {} of {}", top.len(), given);
    for node in &top {
        output::info(&ctx.show(node));
    }
    Ok(())
}

#[instrument(level = "debug", skip(cli))]
fn _config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let dir = root_dir(cli)?;
            let settings = Settings::load(Some(&dir))?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => {
            let dir = root_dir(cli)?;
            output::header("Config files");
            match global_config_path() {
                Some(path) => output::action("global", &path.display()),
                None => output::warning("no global config directory on this platform"),
            }
            output::action("local", &local_config_path(&dir).display());
            output::detail("overridden by ABSTREE_* environment variables");
        }
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}

fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
