//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Scene-graph hierarchy helpers: full node paths and breadth-first walks
#[derive(Parser, Debug)]
#[command(name = "scenetree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Turn debugging information on (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Settings file layered over the global config
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Path format overrides shared by commands that print full paths.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct FormatArgs {
    /// Delimiter between node names
    #[arg(long)]
    pub delimiter: Option<String>,

    /// Prefix of every path
    #[arg(long)]
    pub prefix: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the full path of every node in breadth-first order
    Paths {
        /// Hierarchy description (TOML)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,

        /// Start at the node with this full path instead of the root
        #[arg(long)]
        from: Option<String>,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Walk the hierarchy breadth-first, pruning excluded branches
    Walk {
        /// Hierarchy description (TOML)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,

        /// Start at the node with this full path instead of the root
        #[arg(long)]
        from: Option<String>,

        /// Full path of a node to skip together with its descendants
        #[arg(short, long)]
        exclude: Vec<String>,

        /// Print node names instead of full paths
        #[arg(long)]
        names: bool,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Draw the hierarchy as a tree
    Tree {
        /// Hierarchy description (TOML)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Show effective settings
    Config,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_walk_collects_repeated_excludes() {
        let cli = Cli::try_parse_from([
            "scenetree",
            "walk",
            "scene.toml",
            "-e",
            "/World",
            "--exclude",
            "/Camera",
            "--delimiter",
            "-",
        ])
        .unwrap();

        match cli.command {
            Commands::Walk {
                exclude, format, ..
            } => {
                assert_eq!(exclude, vec!["/World", "/Camera"]);
                assert_eq!(format.delimiter.as_deref(), Some("-"));
                assert_eq!(format.prefix, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_debug_flag_counts() {
        let cli = Cli::try_parse_from(["scenetree", "-ddd", "config"]).unwrap();
        assert_eq!(cli.debug, 3);
    }
}
