//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

/// Synthetic organization hierarchy generator
#[derive(Parser, Debug)]
#[command(name = "orggen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug output, repeat for more detail
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// List leaf node ids instead of drawing the tree
    #[arg(long, global = true)]
    pub leaves: bool,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,

    /// Print author and version information
    #[arg(long)]
    pub info: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a hierarchy with an exact level count
    Fixed {
        /// Total employees including the root
        #[arg(short, long)]
        total: Option<usize>,

        /// Exact number of hierarchy levels
        #[arg(short, long)]
        levels: Option<usize>,

        /// Cap on the ideal number of direct reports per manager
        #[arg(short, long)]
        max_reports: Option<usize>,
    },

    /// Generate a hierarchy with ratio/min/max branching bounds
    Flexible {
        /// Total employees including the root
        #[arg(short, long)]
        total: Option<usize>,

        /// Ideal number of direct reports per manager
        #[arg(short, long)]
        ratio: Option<usize>,

        /// Minimum direct reports assigned to a manager per visit
        #[arg(long)]
        min: Option<usize>,

        /// Hard cap on direct reports per manager
        #[arg(long)]
        max: Option<usize>,
    },

    /// Generate a perfectly uniform ratio hierarchy
    Strict {
        /// Total employees including the root
        #[arg(short, long)]
        total: Option<usize>,

        /// Exact number of direct reports per manager
        #[arg(short, long)]
        ratio: Option<usize>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,
}
