use symfinder_lib::config::Experiment;
use symfinder_lib::config::ExperimentMap;

use super::*;

fn sample_map(names: &[&str]) -> ExperimentMap {
    names
        .iter()
        .map(|n| (n.to_string(), Experiment::default()))
        .collect()
}

#[test]
fn parsed_selection_includes_only_the_requested_names() {
    let selection = Selection::parse("A C");

    assert!(selection.includes("A"));
    assert!(!selection.includes("B"));
    assert!(selection.includes("C"));
}

#[test]
fn blank_selection_includes_everything() {
    assert!(Selection::parse("").includes("anything"));
    assert!(Selection::parse("   \t ").includes("anything"));
}

#[test]
fn explicit_names_override() {
    let selection = Selection::from_names(vec!["A".to_string()]);

    assert!(selection.includes("A"));
    assert!(!selection.includes("B"));

    assert!(Selection::from_names(vec![]).includes("B"));
}

#[test]
fn repeated_whitespace_is_tolerated() {
    let selection = Selection::parse("  A   C ");

    assert!(selection.includes("A"));
    assert!(selection.includes("C"));
    assert!(!selection.includes(""));
}

#[test]
fn warning_about_unknown_names_does_not_drop_known_ones() {
    let selection = Selection::parse("A Z");

    // Z only warns, A stays selected.
    selection.warn_unknown(&sample_map(&["A", "B"]));
    assert!(selection.includes("A"));
    assert!(!selection.includes("B"));
}
