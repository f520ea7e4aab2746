use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "isingmc - estimate the ground state of an Ising spin model by random sampling.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used to sample chunks in parallel.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate the ground-state energy and spin configuration of a graph file.
    Solve(SolveArgs),
    /// Evaluate the energy of a given spin state on a graph file.
    Energy(EnergyArgs),
}

/// Arguments for the `solve` subcommand.
#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Path to the input graph file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path of the result file. Defaults to `output_<label>.txt` in the output directory.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Search Overrides ---
    /// Master seed for the random sampler. Omit for a fresh seed per run.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Samples drawn per possible state; the run performs 2^N times this many iterations.
    #[arg(long, value_name = "INT")]
    pub samples_per_state: Option<u64>,

    /// Refuse to start if the iteration budget is larger than this.
    #[arg(long, value_name = "INT")]
    pub max_iterations: Option<u64>,

    /// Iterations per independently seeded chunk.
    #[arg(long, value_name = "INT")]
    pub chunk_size: Option<u64>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S search.seed=42
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `energy` subcommand.
#[derive(Args, Debug)]
pub struct EnergyArgs {
    /// Path to the input graph file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Spin state as a string of '+' and '-', one symbol per spin.
    #[arg(long, required = true, value_name = "STATE", allow_hyphen_values = true)]
    pub state: String,
}
