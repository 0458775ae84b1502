use std::collections::BTreeSet;
use std::env;

use log::warn;
use symfinder_lib::config::ExperimentMap;
use symfinder_lib::constants::PROJECTS_ENV;

/// The set of experiment names requested for this invocation.
///
/// `None` means no filter was supplied and every experiment in the
/// manifest is processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection(Option<BTreeSet<String>>);

impl Selection {
    /// Read the selection from [PROJECTS_ENV].
    ///
    /// An absent or blank variable selects everything.
    pub fn from_env() -> Selection {
        match env::var(PROJECTS_ENV) {
            Ok(raw) => Selection::parse(&raw),
            Err(_) => Selection(None),
        }
    }

    /// Parse a whitespace-separated list of experiment names.
    pub fn parse(raw: &str) -> Selection {
        let names: BTreeSet<String> = raw.split_whitespace().map(str::to_string).collect();

        if names.is_empty() {
            Selection(None)
        } else {
            Selection(Some(names))
        }
    }

    /// Build a selection from an explicit list of names.
    pub fn from_names(names: Vec<String>) -> Selection {
        if names.is_empty() {
            Selection(None)
        } else {
            Selection(Some(names.into_iter().collect()))
        }
    }

    /// Whether this experiment should be processed.
    pub fn includes(&self, name: &str) -> bool {
        match &self.0 {
            Some(names) => names.contains(name),
            None => true,
        }
    }

    /// Warn about requested names with no entry in the manifest.
    ///
    /// A misspelled name is not fatal, the remaining names are still
    /// processed.
    pub fn warn_unknown(&self, experiments: &ExperimentMap) {
        if let Some(names) = &self.0 {
            for name in names {
                if !experiments.contains_key(name) {
                    warn!("project {} does not exist", name);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
