//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Look for `gridcolor.toml` in that directory
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// gridcolor - Greedy coloring of rectilinear lattice graphs
#[derive(Parser, Debug)]
#[command(name = "gridcolor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Look for gridcolor.toml in this directory instead of the current one
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Lattice size arguments shared by the pipeline commands.
///
/// Either value may be omitted when the config file provides it.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct GridArgs {
    /// Number of lattice rows
    #[arg(long = "nx", value_name = "NX")]
    pub rows: Option<u32>,

    /// Number of lattice columns
    #[arg(long = "ny", value_name = "NY")]
    pub cols: Option<u32>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Color a lattice and write it as a VTK mesh
    #[command(
        name = "render",
        long_about = "Color a lattice and write it as a legacy VTK mesh.\n\n\
            Builds the NX x NY orthogonal lattice, colors it greedily in \
            breadth-first order from vertex 0, and writes an unstructured grid \
            with one point per vertex, one line cell per edge, and the color \
            as a per-point scalar. Color usage is reported on stderr.",
        after_help = "\
EXAMPLES:
    # Write a 100x80 lattice to stdout
    gridcolor render --nx 100 --ny 80 > grid.vtk

    # Write to a file and check the coloring first
    gridcolor render --nx 100 --ny 80 -o grid.vtk --verify

    # Rows and columns from gridcolor.toml, no stats
    gridcolor render --no-stats"
    )]
    Render {
        #[command(flatten)]
        grid: GridArgs,

        /// Write the mesh to this file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Do not print color usage
        #[arg(long)]
        no_stats: bool,

        /// Verify the coloring before writing
        #[arg(long)]
        verify: bool,
    },

    /// Print color count and per-color usage
    #[command(
        name = "stats",
        after_help = "\
EXAMPLES:
    gridcolor stats --nx 3 --ny 3
    gridcolor stats --nx 3 --ny 3 --json"
    )]
    Stats {
        #[command(flatten)]
        grid: GridArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Verify graph invariants and coloring properness
    #[command(
        name = "check",
        long_about = "Run the pipeline and verify the result.\n\n\
            Re-checks the adjacency tables (offsets, symmetry, no self-loops or \
            duplicates) and that every vertex is colored with no two adjacent \
            vertices sharing a color. Exits non-zero on any violation."
    )]
    Check {
        #[command(flatten)]
        grid: GridArgs,
    },

    /// Show or create configuration
    #[command(
        name = "config",
        long_about = "Inspect or create gridcolor configuration.\n\n\
            Global config lives at ~/.gridcolor/config.toml (or $GRIDCOLOR_CONFIG, \
            or $XDG_CONFIG_HOME/gridcolor/config.toml). A gridcolor.toml in the \
            working directory overrides it.",
        after_help = "\
EXAMPLES:
    # Show the merged configuration
    gridcolor config show

    # Read one value
    gridcolor config get vtk.title

    # Create the global config file
    gridcolor config init"
    )]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
EXAMPLES:
    gridcolor completion bash >> ~/.bashrc
    gridcolor completion zsh >> ~/.zshrc
    gridcolor completion fish > ~/.config/fish/completions/gridcolor.fish"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Print the merged configuration as TOML
    Show,
    /// Get a configuration value
    Get {
        /// Configuration key (rows, cols, stats, verify, vtk.title, vtk.scalar_name)
        key: String,
    },
    /// Print the canonical global config path
    Path,
    /// Write a starter global config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_render_with_equals_syntax() {
        let cli = Cli::try_parse_from(["gridcolor", "render", "--nx=3", "--ny=4"]).unwrap();
        match cli.command {
            Command::Render { grid, .. } => {
                assert_eq!(grid.rows, Some(3));
                assert_eq!(grid.cols, Some(4));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn grid_args_are_optional() {
        let cli = Cli::try_parse_from(["gridcolor", "stats", "--json"]).unwrap();
        match cli.command {
            Command::Stats { grid, json } => {
                assert!(json);
                assert!(grid.rows.is_none());
                assert!(grid.cols.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn negative_size_rejected_by_parser() {
        assert!(Cli::try_parse_from(["gridcolor", "check", "--nx", "-1", "--ny", "2"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["gridcolor", "check", "--nx", "1", "--ny", "1", "-q"])
            .unwrap();
        assert!(cli.quiet);
    }
}
