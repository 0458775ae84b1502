use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use serde::Deserialize;
use serde::Serialize;

use self::scalar::Scalar;
use crate::constants::EXPERIMENTS_DIR;
use crate::error::ctx;
use crate::error::Ctx;
use crate::file_system::FileOperations;

pub mod scalar;

/// The experiments declared in an experiments file, keyed by name.
pub type ExperimentMap = BTreeMap<String, Experiment>;

/// The top-level `symfinder.yaml` manifest.
///
/// The real file carries settings for other parts of the pipeline as well,
/// so unknown keys are accepted and ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// The name of the experiments file, under [EXPERIMENTS_DIR].
    pub experiments_file: String,
}

/// One experiment: a project to fetch and analyse.
///
/// # Examples
///
/// ```yaml
/// junit:
///   repositoryUrl: https://github.com/junit-team/junit4
///   sourcePackage: src
///   tagIds:
///     - r4.12
///     - r4.13.2
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Experiment {
    /// The remote repository holding the project sources.
    ///
    /// When absent the sources are expected to already be present locally
    /// and the fetch workflow leaves the experiment alone.
    pub repository_url: Option<String>,

    /// The package inside the checked-out sources where analysis starts.
    ///
    /// Required for any experiment the run workflow produces runs for.
    pub source_package: Option<String>,

    /// The git tags to analyse, one snapshot per tag.
    #[serde(default)]
    pub tag_ids: Vec<Scalar>,

    /// The git commits to analyse, one snapshot per commit.
    #[serde(default)]
    pub commit_ids: Vec<Scalar>,

    /// Forwarded to `rerun.sh` as its fourth argument.
    pub build_image: Option<Scalar>,
}

impl Experiment {
    /// All version identifiers of this experiment, tags before commits.
    pub fn version_ids(&self) -> impl Iterator<Item = &Scalar> {
        self.tag_ids.iter().chain(self.commit_ids.iter())
    }

    /// The build flag passed to `rerun.sh`, empty when not configured.
    pub fn build_flag(&self) -> String {
        self.build_image
            .as_ref()
            .map(|s| s.as_str().to_string())
            .unwrap_or_default()
    }
}

impl Manifest {
    /// Load the manifest from a YAML file at the provided path.
    pub fn from_file<F: FileOperations>(path: &Path, fs: &F) -> Result<Manifest> {
        serde_yaml::from_str(&fs.read_utf8(path)?).with_context(ctx!(
          "Could not parse the manifest {path:?}", ;
          "Ensure that it is valid yaml and names an experimentsFile",
        ))
    }

    /// The path of the experiments file this manifest refers to.
    pub fn experiments_path(&self) -> PathBuf {
        Path::new(EXPERIMENTS_DIR).join(&self.experiments_file)
    }

    /// Load the experiments named by this manifest.
    pub fn experiments<F: FileOperations>(&self, fs: &F) -> Result<ExperimentMap> {
        load_experiments(&self.experiments_path(), fs)
    }
}

/// Load an experiments file from a YAML file at the provided path.
pub fn load_experiments<F: FileOperations>(path: &Path, fs: &F) -> Result<ExperimentMap> {
    serde_yaml::from_str(&fs.read_utf8(path)?).with_context(ctx!(
      "Could not parse the experiments file {path:?}", ;
      "Ensure that it is valid yaml mapping experiment names to configurations",
    ))
}

/// Derive the codename for one (experiment, version) pair.
///
/// Slashes in the identifier would break the output paths derived from the
/// codename, so every `/` becomes `_`.
pub fn codename(name: &str, id: &str) -> String {
    format!("{}-{}", name, id.replace('/', "_"))
}

/// All artifact codenames of one experiment.
///
/// One codename per version identifier; an experiment with no identifiers
/// and no repository is a single snapshot named after itself, and a
/// repository-backed experiment with no identifiers yields nothing.
pub fn codenames(name: &str, experiment: &Experiment) -> Vec<String> {
    let mut ids = experiment.version_ids().peekable();

    if ids.peek().is_none() {
        if experiment.repository_url.is_none() {
            return vec![name.to_string()];
        }
        return Vec::new();
    }

    ids.map(|id| codename(name, id.as_str())).collect()
}

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
