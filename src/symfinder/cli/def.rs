use std::path::PathBuf;

use clap::ArgAction;
use clap::Parser;
use clap::Subcommand;

/// Structure of the main command (symfinder-runner).
#[derive(Parser, Debug)]
#[command(
    about = "symfinder-runner, a batch driver for symfinder experiments",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// The main command issued.
    #[command(subcommand)]
    pub command: RunnerCommand,

    /// The path to the manifest file.
    #[arg(short, long, default_value = "./symfinder.yaml", global = true)]
    pub config: PathBuf,

    /// Verbose mode, displays debug info. For even more try: -vv.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Dry run, log the external commands without running them.
    #[arg(short, long, global = true)]
    pub dry: bool,

    /// Process only these experiments, overriding SYMFINDER_PROJECTS.
    #[arg(short, long, global = true, value_delimiter = ' ', num_args = 1..)]
    pub projects: Option<Vec<String>>,
}

/// Enum for root-level `symfinder-runner` commands.
#[derive(Subcommand, Debug)]
pub enum RunnerCommand {
    /// Download the sources of every selected experiment, check out its
    /// versions, and regenerate its visualization files.
    #[command()]
    Fetch,

    /// Trigger one analysis run per selected experiment version.
    #[command()]
    Run,

    /// Print information about the version.
    #[command()]
    Version,
}
