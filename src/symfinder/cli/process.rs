use std::env;
use std::process::exit;

use anyhow::anyhow;
use anyhow::Context;
use anyhow::Result;
use clap::CommandFactory;
use clap::FromArgMatches;
use colog::default_builder;
use log::debug;
use log::LevelFilter;
use symfinder_lib::config::Manifest;
use symfinder_lib::constants::ERROR_STYLE;
use symfinder_lib::ctx;
use symfinder_lib::error::Ctx;
use symfinder_lib::file_system::FileSystemInteractor;

use crate::cli::def::Cli;
use crate::cli::def::RunnerCommand;
use crate::cli::printing::get_styles;
use crate::cli::printing::print_version;
use crate::fetch::fetch_projects;
use crate::run::run_experiments;
use crate::scripts::ShellInteractor;
use crate::selection::Selection;

/// This function parses the command that the driver was run with.
pub fn parse_command() {
    let styled = Cli::command().styles(get_styles()).get_matches();

    // This unwrap will print the error if the command is wrong.
    let command = Cli::from_arg_matches(&styled).unwrap();

    // https://github.com/rust-lang/rust/blob/master/library/std/src/backtrace.rs
    let backtrace_enabled = match env::var("RUST_LIB_BACKTRACE") {
        Ok(s) => s != "0",
        Err(_) => match env::var("RUST_BACKTRACE") {
            Ok(s) => s != "0",
            Err(_) => false,
        },
    };

    if backtrace_enabled {
        eprintln!("{:?}", process_command(&command));
    } else if let Err(e) = process_command(&command) {
        eprintln!("{}error:{:#} {}", ERROR_STYLE, ERROR_STYLE, e.root_cause());
        eprint!("{}", e);
        exit(1);
    }
}

/// CLAP has parsed the command, now we process it.
pub fn process_command(cmd: &Cli) -> Result<()> {
    setup_logging(cmd)?;

    let file_system = FileSystemInteractor;
    let scripts = ShellInteractor { dry_run: cmd.dry };

    let selection = match &cmd.projects {
        Some(names) => Selection::from_names(names.clone()),
        None => Selection::from_env(),
    };

    match cmd.command {
        RunnerCommand::Fetch => {
            debug!("Reading the manifest: {:?}", cmd.config);
            let manifest = Manifest::from_file(&cmd.config, &file_system)?;
            let experiments = manifest.experiments(&file_system)?;

            fetch_projects(&experiments, &selection, &scripts)?;
        }

        RunnerCommand::Run => {
            debug!("Reading the manifest: {:?}", cmd.config);
            let manifest = Manifest::from_file(&cmd.config, &file_system)?;
            let experiments = manifest.experiments(&file_system)?;

            run_experiments(&experiments, &selection, &scripts)?;
        }

        RunnerCommand::Version => print_version(),
    }

    Ok(())
}

/// Prepare the log levels for the application.
fn setup_logging(cmd: &Cli) -> Result<()> {
    let mut log_build = default_builder();

    if cmd.verbose == 2 {
        log_build.filter(None, LevelFilter::Trace);
    } else if cmd.verbose == 1 {
        log_build.filter(None, LevelFilter::Debug);
    } else if cmd.verbose == 0 {
        log_build.filter(None, LevelFilter::Info);
    } else {
        return Err(anyhow!("Only two levels of verbosity supported (ie. -vv)")).context("");
    }

    log_build.try_init().with_context(ctx!(
        "Failed to initialize the command line interface", ;
        "Make sure you are using a supported terminal",
    ))
}
