use std::fs;

use tempdir::TempDir;

use super::*;

const SUCCEEDING_SCRIPT: &str = "#!/bin/bash\ntouch \"$1\"\n";
const FAILING_SCRIPT: &str = "#!/bin/bash\nexit 3\n";

#[test]
fn a_succeeding_script_runs_with_its_arguments() {
    let dir = TempDir::new("scripts").unwrap();
    let script = dir.path().join("ok.sh");
    let marker = dir.path().join("marker");

    fs::write(&script, SUCCEEDING_SCRIPT).unwrap();

    let interactor = ShellInteractor { dry_run: false };
    interactor
        .run_script(
            script.to_str().unwrap(),
            &[marker.to_str().unwrap().to_string()],
        )
        .expect("Unexpected script error.");

    assert!(marker.exists());
    dir.close().unwrap();
}

#[test]
fn a_nonzero_exit_is_an_error() {
    let dir = TempDir::new("scripts").unwrap();
    let script = dir.path().join("fail.sh");

    fs::write(&script, FAILING_SCRIPT).unwrap();

    let interactor = ShellInteractor { dry_run: false };
    let result = interactor.run_script(script.to_str().unwrap(), &[]);

    assert!(result.is_err());
    assert!(format!("{:?}", result).contains("exited with"));
    dir.close().unwrap();
}

#[test]
fn a_dry_run_performs_nothing() {
    let dir = TempDir::new("scripts").unwrap();
    let script = dir.path().join("ok.sh");
    let marker = dir.path().join("marker");

    fs::write(&script, SUCCEEDING_SCRIPT).unwrap();

    let interactor = ShellInteractor { dry_run: true };
    interactor
        .run_script(
            script.to_str().unwrap(),
            &[marker.to_str().unwrap().to_string()],
        )
        .expect("Unexpected script error.");

    assert!(!marker.exists());
    dir.close().unwrap();
}

#[test]
fn a_dry_run_succeeds_even_for_a_missing_script() {
    let interactor = ShellInteractor { dry_run: true };

    assert!(interactor
        .run_script("surely_not_present.sh", &["a".to_string()])
        .is_ok());
}
