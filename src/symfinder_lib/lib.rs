//! Code shared between the workflows of the symfinder batch driver.

/// Structs and related methods for the manifest and experiments files,
/// declaratively specifying what to fetch and analyse.
pub mod config;

/// Common file operations.
pub mod file_system;

/// The error handling for `symfinder-runner`.
pub mod error;

/// Constant values.
pub mod constants;
