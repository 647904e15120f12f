//! Command dispatch for the scenetree binary

use std::collections::HashSet;
use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, FormatArgs};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::{
    HierarchyBuilder, NodeId, PathFormat, SceneArena, SceneTreeConvert,
};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);

    match &cli.command {
        Commands::Paths { file, from, format } => _paths(&settings, file, from.as_deref(), format),
        Commands::Walk {
            file,
            from,
            exclude,
            names,
            format,
        } => _walk(&settings, file, from.as_deref(), exclude, *names, format),
        Commands::Tree { file } => _tree(file),
        Commands::Config => _config(&settings),
        Commands::Completion { shell } => _completion(*shell),
    }
}

#[instrument(skip(settings))]
fn _paths(settings: &Settings, file: &Path, from: Option<&str>, format: &FormatArgs) -> CliResult<()> {
    let arena = HierarchyBuilder::new().build_from_path(file)?;
    let format = effective_format(settings, format);
    let start = resolve_start(&arena, from, &format)?;

    for path in collect_paths(&arena, start, &format)? {
        output::info(&path);
    }
    Ok(())
}

#[instrument(skip(settings))]
fn _walk(
    settings: &Settings,
    file: &Path,
    from: Option<&str>,
    exclude: &[String],
    names: bool,
    format: &FormatArgs,
) -> CliResult<()> {
    let arena = HierarchyBuilder::new().build_from_path(file)?;
    let format = effective_format(settings, format);
    let start = resolve_start(&arena, from, &format)?;

    let (excluded, unknown) = resolve_excludes(&arena, exclude, &format);
    for path in unknown {
        output::warning(&format!("no node at {}, nothing excluded", path));
    }

    for line in collect_walk(&arena, start, &excluded, names, &format)? {
        output::info(&line);
    }
    Ok(())
}

#[instrument]
fn _tree(file: &Path) -> CliResult<()> {
    let arena = HierarchyBuilder::new().build_from_path(file)?;
    output::header(&file.display());
    output::info(&arena.to_tree_string());
    Ok(())
}

fn _config(settings: &Settings) -> CliResult<()> {
    output::info(&settings.to_toml()?.trim_end());
    Ok(())
}

fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

/// Settings format with command line overrides applied.
pub fn effective_format(settings: &Settings, args: &FormatArgs) -> PathFormat {
    PathFormat {
        delimiter: args
            .delimiter
            .clone()
            .unwrap_or_else(|| settings.path.delimiter.clone()),
        prefix: args
            .prefix
            .clone()
            .unwrap_or_else(|| settings.path.prefix.clone()),
    }
}

/// Node to start from: the node at `from`, or the root.
pub fn resolve_start(arena: &SceneArena, from: Option<&str>, format: &PathFormat) -> CliResult<Option<NodeId>> {
    match from {
        None => Ok(arena.root()),
        Some(path) => arena
            .find_by_path(path, format)
            .map(Some)
            .ok_or_else(|| CliError::InvalidArgs(format!("no node at {}", path))),
    }
}

/// Splits exclude paths into resolved node ids and paths matching no node.
pub fn resolve_excludes<'p>(
    arena: &SceneArena,
    paths: &'p [String],
    format: &PathFormat,
) -> (HashSet<NodeId>, Vec<&'p str>) {
    let mut excluded = HashSet::new();
    let mut unknown = Vec::new();
    for path in paths {
        match arena.find_by_path(path, format) {
            Some(idx) => {
                excluded.insert(idx);
            }
            None => unknown.push(path.as_str()),
        }
    }
    (excluded, unknown)
}

/// Full paths of `start` and its descendants in breadth-first order.
pub fn collect_paths(arena: &SceneArena, start: Option<NodeId>, format: &PathFormat) -> CliResult<Vec<String>> {
    let mut paths = Vec::new();
    for (idx, _) in arena.iterate_hierarchy(start)? {
        paths.push(arena.full_path_fmt(idx, format)?);
    }
    Ok(paths)
}

/// Breadth-first walk from `start` without the excluded branches.
pub fn collect_walk(
    arena: &SceneArena,
    start: Option<NodeId>,
    excluded: &HashSet<NodeId>,
    names: bool,
    format: &PathFormat,
) -> CliResult<Vec<String>> {
    let mut lines = Vec::new();
    for (idx, node) in arena.iterate_hierarchy_excluding(start, Some(excluded))? {
        if names {
            lines.push(node.name.clone());
        } else {
            lines.push(arena.full_path_fmt(idx, format)?);
        }
    }
    Ok(lines)
}
