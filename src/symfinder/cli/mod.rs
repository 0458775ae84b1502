/// The clap definition of the command line.
pub mod def;

/// Printing helpers for the command line.
pub mod printing;

/// Processing of the parsed command line.
pub mod process;
