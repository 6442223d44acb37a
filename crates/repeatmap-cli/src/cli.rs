use clap::{Args, Parser, Subcommand};
use repeatmap::engine::state::RenderMode;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "repeatmap CLI - Annotate repeat-protein structures by residue index and resolve the per-atom style array a molecular viewer displays.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the per-atom style array for an interaction state.
    Style(StyleArgs),
    /// Summarize the annotations of the currently selected atom.
    Describe(DescribeArgs),
    /// Print the region partition and the configured domain windows.
    Tables(TablesArgs),
}

/// Arguments for the `style` subcommand.
#[derive(Args, Debug)]
pub struct StyleArgs {
    /// Path to the atom table materialized by the structure parser (CSV).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub atoms: PathBuf,

    /// Selection history as atom indices; the last one given is the active
    /// selection. Omit for the unselected baseline.
    #[arg(short, long = "select", value_name = "INDEX")]
    pub select: Vec<usize>,

    /// Highlight configured domain windows over the region highlight.
    #[arg(short = 'd', long)]
    pub domain_highlight: bool,

    /// Rendering representation applied to every atom.
    #[arg(
        short,
        long,
        value_name = "MODE",
        default_value = "cartoon",
        value_parser = parse_render_mode,
    )]
    pub mode: RenderMode,

    /// Override the built-in domain windows with a TOML table.
    #[arg(long, value_name = "PATH")]
    pub domain_table: Option<PathBuf>,

    /// Write the style array to a file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `describe` subcommand.
#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// Path to the atom table materialized by the structure parser (CSV).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub atoms: PathBuf,

    /// Selection history as atom indices; the last one given is the active
    /// selection.
    #[arg(short, long = "select", value_name = "INDEX")]
    pub select: Vec<usize>,

    /// Override the built-in domain windows with a TOML table.
    #[arg(long, value_name = "PATH")]
    pub domain_table: Option<PathBuf>,

    /// Emit the summary as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `tables` subcommand.
#[derive(Args, Debug)]
pub struct TablesArgs {
    /// Print a configured domain table instead of the built-in windows.
    #[arg(long, value_name = "PATH")]
    pub domain_table: Option<PathBuf>,
}

fn parse_render_mode(s: &str) -> Result<RenderMode, String> {
    s.parse()
        .map_err(|_| format!("unknown render mode '{s}' (expected stick, cartoon, or sphere)"))
}
