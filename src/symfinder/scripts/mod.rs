use std::process::Command;

use anyhow::Context;
use anyhow::Result;
use log::debug;
use log::info;
use symfinder_lib::bailc;
use symfinder_lib::ctx;
use symfinder_lib::error::Ctx;

/// The boundary to the external shell scripts.
///
/// Everything the driver does to the outside world goes through this
/// trait, so the workflows can be tested with a recording substitute.
pub trait ScriptInteractor {
    /// Run a script with the given arguments and wait for it to finish.
    ///
    /// A spawn failure or a non-zero exit is an error, there is no retry.
    fn run_script(&self, script: &str, args: &[String]) -> Result<()>;
}

/// Runs scripts through `bash` on the local machine.
#[derive(Clone, Copy, Debug)]
pub struct ShellInteractor {
    /// If true, log the invocation instead of performing it.
    pub dry_run: bool,
}

impl ScriptInteractor for ShellInteractor {
    fn run_script(&self, script: &str, args: &[String]) -> Result<()> {
        if self.dry_run {
            info!("Would have run {} {} (dry)", script, args.join(" "));
            return Ok(());
        }

        debug!("Running {} {:?}", script, args);

        let status = Command::new("bash")
            .arg(script)
            .args(args)
            .status()
            .with_context(ctx!(
              "Could not run {script}", ;
              "Ensure that the script is present in the working directory",
            ))?;

        if !status.success() {
            bailc!(
                "{script} exited with {status}", ;
                "The batch stops at the first failing script", ;
                "Fix the failure and re-invoke the driver",
            );
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
