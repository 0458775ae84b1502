use anyhow::Context;
use anyhow::Result;
use log::debug;
use log::info;
use symfinder_lib::bailc;
use symfinder_lib::config::codenames;
use symfinder_lib::config::Experiment;
use symfinder_lib::config::ExperimentMap;
use symfinder_lib::constants::GRAPH_OUTPUT_DIR;
use symfinder_lib::constants::RERUN_SCRIPT;
use symfinder_lib::ctx;
use symfinder_lib::error::Ctx;

use crate::scripts::ScriptInteractor;
use crate::selection::Selection;

/// Trigger the analysis runs of every selected experiment.
pub fn run_experiments(
    experiments: &ExperimentMap,
    selection: &Selection,
    scripts: &impl ScriptInteractor,
) -> Result<()> {
    for (name, experiment) in experiments {
        if !selection.includes(name) {
            debug!("Skipping {}, it is not selected", name);
            continue;
        }

        run_experiment(name, experiment, scripts)?;
    }

    Ok(())
}

/// Run the analysis once per snapshot of one experiment.
///
/// Each snapshot is one `rerun.sh` invocation with four positional
/// arguments: the sources package, the graph output path, the codename,
/// and the build flag (empty when not configured).
fn run_experiment(name: &str, experiment: &Experiment, scripts: &impl ScriptInteractor) -> Result<()> {
    let snapshots = codenames(name, experiment);

    if snapshots.is_empty() {
        debug!("No runs for {}", name);
        return Ok(());
    }

    let Some(source_package) = &experiment.source_package else {
        bailc!(
            "Experiment {name} has no sourcePackage", ;
            "The analysis needs to know where the sources of {name} start", ;
            "Add a sourcePackage entry to the experiment",
        );
    };

    let build_flag = experiment.build_flag();

    for codename in snapshots {
        let sources_package = format!("{}/{}", codename, source_package);
        let graph_output = format!("{}/{}.json", GRAPH_OUTPUT_DIR, codename);

        info!("Analysing {}", codename);
        scripts
            .run_script(
                RERUN_SCRIPT,
                &[sources_package, graph_output, codename.clone(), build_flag.clone()],
            )
            .with_context(ctx!(
              "The analysis of {codename} failed", ;
              "",
            ))?;
    }

    Ok(())
}
