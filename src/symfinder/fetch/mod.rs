use anyhow::Result;
use log::debug;
use log::info;
use symfinder_lib::config::codenames;
use symfinder_lib::config::scalar::Scalar;
use symfinder_lib::config::Experiment;
use symfinder_lib::config::ExperimentMap;
use symfinder_lib::constants::DOWNLOAD_SCRIPT;
use symfinder_lib::constants::PROJECTS_DIR;
use symfinder_lib::constants::VISUALIZATION_SCRIPT;

use crate::scripts::ScriptInteractor;
use crate::selection::Selection;

/// Fetch the sources of every selected experiment.
///
/// Misspelled names in the selection only warn; a failing script aborts
/// the whole batch.
pub fn fetch_projects(
    experiments: &ExperimentMap,
    selection: &Selection,
    scripts: &impl ScriptInteractor,
) -> Result<()> {
    selection.warn_unknown(experiments);

    for (name, experiment) in experiments {
        if !selection.includes(name) {
            debug!("Skipping {}, it is not selected", name);
            continue;
        }

        fetch_project(name, experiment, scripts)?;
    }

    Ok(())
}

/// Fetch one project and regenerate its visualization files.
///
/// For a repository-backed experiment: download, check out every tag and
/// commit, then delete the checkout. The cleanup runs regardless of how
/// many versions were processed. Experiments without a repository only
/// get their visualization files regenerated.
fn fetch_project(
    name: &str,
    experiment: &Experiment,
    scripts: &impl ScriptInteractor,
) -> Result<()> {
    if let Some(url) = &experiment.repository_url {
        let project_directory = format!("{}/{}", PROJECTS_DIR, name);

        info!("Fetching {} from {}", name, url);
        scripts.run_script(
            DOWNLOAD_SCRIPT,
            &[
                "download".to_string(),
                url.clone(),
                project_directory.clone(),
            ],
        )?;

        if !experiment.tag_ids.is_empty() {
            checkout_versions(scripts, "tag", &project_directory, &experiment.tag_ids)?;
        }

        if !experiment.commit_ids.is_empty() {
            checkout_versions(scripts, "commit", &project_directory, &experiment.commit_ids)?;
        }

        scripts.run_script(
            DOWNLOAD_SCRIPT,
            &["delete".to_string(), project_directory],
        )?;
    }

    generate_visualization_files(name, experiment, scripts)
}

/// Check out all tag or commit identifiers of an experiment in one batch.
fn checkout_versions(
    scripts: &impl ScriptInteractor,
    id_type: &str,
    project_directory: &str,
    ids: &[Scalar],
) -> Result<()> {
    let mut args = vec![id_type.to_string(), project_directory.to_string()];
    args.extend(ids.iter().map(|id| id.as_str().to_string()));

    scripts.run_script(DOWNLOAD_SCRIPT, &args)
}

/// Regenerate the visualization files of one project.
///
/// The generator receives the experiment name followed by the artifact
/// codenames its index should link to.
fn generate_visualization_files(
    name: &str,
    experiment: &Experiment,
    scripts: &impl ScriptInteractor,
) -> Result<()> {
    let mut args = vec![name.to_string()];
    args.extend(codenames(name, experiment));

    scripts.run_script(VISUALIZATION_SCRIPT, &args)
}
