use std::path::PathBuf;

use super::*;
use crate::test_utils::create_sample_yaml;
use crate::test_utils::REAL_FS;

/// This test will fail if the semantics of the experiments file are
/// changed. If this is the case, update the user documentation and make
/// sure old experiment files still parse.
#[test]
fn breaking_changes_experiment_all_values() {
    let (file_pb, dir) = create_sample_yaml(
        r#"
        junit:
          repositoryUrl: https://github.com/junit-team/junit4
          sourcePackage: src
          tagIds:
            - r4.12
            - 1.0
          commitIds:
            - c3715204786394f461d94953de9a66a4cec684e9
          buildImage: java8
        jfreechart-local:
          sourcePackage: source
    "#,
    );

    let mut expected = ExperimentMap::new();
    expected.insert(
        "junit".to_string(),
        Experiment {
            repository_url: Some("https://github.com/junit-team/junit4".to_string()),
            source_package: Some("src".to_string()),
            tag_ids: vec![Scalar::from("r4.12"), Scalar::from("1.0")],
            commit_ids: vec![Scalar::from("c3715204786394f461d94953de9a66a4cec684e9")],
            build_image: Some(Scalar::from("java8")),
        },
    );
    expected.insert(
        "jfreechart-local".to_string(),
        Experiment {
            source_package: Some("source".to_string()),
            ..Experiment::default()
        },
    );

    assert_eq!(
        expected,
        load_experiments(file_pb.as_path(), &REAL_FS).expect("Unexpected experiments read error.")
    );
    dir.close().unwrap();
}

#[test]
fn numeric_tag_ids_keep_their_literal_form() {
    let (file_pb, dir) = create_sample_yaml(
        r#"
        xp:
          tagIds: [1.0, 2.0, 3, 1.25, v1.0]
    "#,
    );

    let experiments =
        load_experiments(file_pb.as_path(), &REAL_FS).expect("Unexpected experiments read error.");

    let tags: Vec<&str> = experiments["xp"].tag_ids.iter().map(|t| t.as_str()).collect();
    assert_eq!(vec!["1.0", "2.0", "3", "1.25", "v1.0"], tags);
    dir.close().unwrap();
}

#[test]
fn experiments_unknown_field_gives_error() {
    let (file_pb, dir) = create_sample_yaml(
        r#"
        xp:
          repositoryUrl: https://example.org/repo
          tagIdz: [1.0]
    "#,
    );

    assert!(load_experiments(file_pb.as_path(), &REAL_FS).is_err());
    dir.close().unwrap();
}

#[test]
fn experiments_nonexistent_file() {
    let dir = tempdir::TempDir::new("config_folder").unwrap();
    let file_pathbuf = dir.path().join("file.yaml");

    if load_experiments(file_pathbuf.as_path(), &REAL_FS).is_ok() {
        panic!("Error expected.")
    }

    dir.close().unwrap();
}

#[test]
fn manifest_ok_file() {
    let (file_pb, dir) = create_sample_yaml("experimentsFile: symfinder.yaml\n");

    assert_eq!(
        Manifest {
            experiments_file: "symfinder.yaml".to_string(),
        },
        Manifest::from_file(file_pb.as_path(), &REAL_FS).expect("Unexpected manifest read error.")
    );
    dir.close().unwrap();
}

#[test]
fn manifest_ignores_unrelated_keys() {
    let (file_pb, dir) = create_sample_yaml(
        r#"
        experimentsFile: projects.yaml
        neo4j:
          boltAddress: bolt://localhost:7687
    "#,
    );

    let manifest =
        Manifest::from_file(file_pb.as_path(), &REAL_FS).expect("Unexpected manifest read error.");
    assert_eq!("projects.yaml", manifest.experiments_file);
    dir.close().unwrap();
}

#[test]
fn manifest_missing_experiments_file_key() {
    let (file_pb, dir) = create_sample_yaml("somethingElse: 42\n");

    assert!(Manifest::from_file(file_pb.as_path(), &REAL_FS).is_err());
    dir.close().unwrap();
}

#[test]
fn manifest_unparseable_file() {
    let (file_pb, dir) = create_sample_yaml("experimentsFile: [unclosed\n");

    assert!(Manifest::from_file(file_pb.as_path(), &REAL_FS).is_err());
    dir.close().unwrap();
}

#[test]
fn experiments_path_is_under_the_experiments_dir() {
    let manifest = Manifest {
        experiments_file: "projects.yaml".to_string(),
    };

    assert_eq!(
        PathBuf::from("experiments/projects.yaml"),
        manifest.experiments_path()
    );
}

#[test]
fn codename_replaces_every_slash() {
    assert_eq!("junit-r4.12", codename("junit", "r4.12"));
    assert_eq!("junit-releases_r4.12", codename("junit", "releases/r4.12"));
    assert_eq!("xp-a_b_c", codename("xp", "a/b/c"));
    assert!(!codename("xp", "a/b/c").contains('/'));
}

#[test]
fn codenames_of_a_versioned_experiment() {
    let experiment = Experiment {
        repository_url: Some("https://example.org/repo".to_string()),
        tag_ids: vec![Scalar::from("1.0"), Scalar::from("2.0")],
        commit_ids: vec![Scalar::from("abc123")],
        ..Experiment::default()
    };

    assert_eq!(
        vec!["xp-1.0", "xp-2.0", "xp-abc123"],
        codenames("xp", &experiment)
    );
}

#[test]
fn codenames_of_a_local_experiment() {
    let experiment = Experiment {
        source_package: Some("src".to_string()),
        ..Experiment::default()
    };

    assert_eq!(vec!["xp"], codenames("xp", &experiment));
}

#[test]
fn codenames_of_a_repository_without_versions() {
    let experiment = Experiment {
        repository_url: Some("https://example.org/repo".to_string()),
        ..Experiment::default()
    };

    assert!(codenames("xp", &experiment).is_empty());
}

#[test]
fn build_flag_defaults_to_empty() {
    assert_eq!("", Experiment::default().build_flag());

    let experiment = Experiment {
        build_image: Some(Scalar::from("java8")),
        ..Experiment::default()
    };
    assert_eq!("java8", experiment.build_flag());
}
