//! The symfinder batch driver.

/// The command line interface and relevant structures.
pub mod cli;

/// Selecting which experiments an invocation processes.
pub mod selection;

/// An interface for invoking the external shell scripts that do the
/// actual fetching and analysis.
pub mod scripts;

/// Fetching project sources and checking out their versions.
pub mod fetch;

/// Triggering one analysis run per experiment version.
pub mod run;


/// The main CLI entry-point of the `symfinder-runner` utility.
///
/// This function parses command-line arguments and executes
/// sub-commands as specified by the user.
fn main() {
    cli::process::parse_command();
}
