use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Shared application context for global flags
#[derive(Clone, Debug)]
pub struct AppContext {
    pub quiet: bool,    // global --quiet
    pub no_color: bool, // global --no-color
}

#[derive(Parser)]
#[command(name = "narrative")]
#[command(about = "Assemble a readable document from the prose hidden in commented source code")]
#[command(version, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Suppress progress bars and non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Weave the manifest's files into one combined document
    Assemble(AssembleArgs),

    /// Initialize a starter narrative.yaml marker config
    Init(InitArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Parser)]
pub struct AssembleArgs {
    /// Manifest file listing source files to weave, one per line
    pub input: PathBuf,

    /// Output document path (appended to, never truncated)
    #[arg(short, long, default_value = "final.md")]
    pub output: PathBuf,

    /// Marker configuration file (per-extension prose delimiters)
    #[arg(short, long, default_value = "./narrative.yaml")]
    pub markers: PathBuf,
}

#[derive(Parser)]
pub struct InitArgs {
    /// Directory to initialize the marker config in
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing config file
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,

    /// Output directory; if omitted and --stdout not set, prints error
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Print completion script to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,
}
