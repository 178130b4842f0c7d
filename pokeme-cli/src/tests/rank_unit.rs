//! Focused unit tests covering rank CLI configuration and profile loading.

use super::helpers::{ProfileFiles, write_utf8};
use crate::rank::{
    RankArgs, RankConfig, config_from_layers_for_test, load_candidates, load_viewer,
    run_rank_with,
};
use crate::{
    ARG_CANDIDATES, ARG_VIEWER, CliError, ENV_CANDIDATES, ENV_VIEWER, ProfileLoadError,
};
use camino::Utf8PathBuf;
use pokeme_core::{ProfileJsonError, SkillLevel};
use pokeme_scorer::{FactorWeights, WeightsError};
use rstest::rstest;
use serde_json::Value;

fn args_for(files: &ProfileFiles) -> RankArgs {
    RankArgs {
        viewer: Some(files.viewer()),
        candidates: Some(files.candidates()),
        ..RankArgs::default()
    }
}

#[rstest]
#[case(None, Some(Utf8PathBuf::from("candidates.json")), ARG_VIEWER, ENV_VIEWER)]
#[case(Some(Utf8PathBuf::from("viewer.json")), None, ARG_CANDIDATES, ENV_CANDIDATES)]
fn converting_without_required_paths_errors(
    #[case] viewer: Option<Utf8PathBuf>,
    #[case] candidates: Option<Utf8PathBuf>,
    #[case] field: &'static str,
    #[case] env_var: &'static str,
) {
    let args = RankArgs {
        viewer,
        candidates,
        ..RankArgs::default()
    };
    let err = RankConfig::try_from(args).expect_err("missing path should error");
    assert!(
        matches!(
            err,
            CliError::MissingArgument { field: missing, env } if missing == field && env == env_var
        ),
        "expected MissingArgument for {field}, found {err:?}"
    );
}

#[rstest]
fn config_builds_filter_and_default_weights() {
    let args = RankArgs {
        viewer: Some(Utf8PathBuf::from("viewer.json")),
        candidates: Some(Utf8PathBuf::from("candidates.json")),
        viewer_id: Some("me".to_owned()),
        exclude: vec!["u-1".to_owned(), "u-2".to_owned()],
        sport: Some("Tennis".to_owned()),
        ..RankArgs::default()
    };

    let config = RankConfig::try_from(args).expect("config should build");

    assert_eq!(config.filter.viewer_id.as_deref(), Some("me"));
    assert!(config.filter.excluded.contains("u-1"));
    assert!(config.filter.excluded.contains("u-2"));
    assert_eq!(config.filter.sport.as_deref(), Some("Tennis"));
    assert_eq!(config.weights, FactorWeights::default());
}

#[rstest]
fn weight_overrides_replace_defaults() {
    let args = RankArgs {
        viewer: Some(Utf8PathBuf::from("viewer.json")),
        candidates: Some(Utf8PathBuf::from("candidates.json")),
        sports_weight: Some(1.0),
        availability_weight: Some(0.0),
        ..RankArgs::default()
    };

    let config = RankConfig::try_from(args).expect("config should build");

    assert_eq!(
        config.weights,
        FactorWeights {
            sports: 1.0,
            availability: 0.0,
            ..FactorWeights::default()
        }
    );
}

#[rstest]
fn negative_weight_override_is_rejected() {
    let args = RankArgs {
        viewer: Some(Utf8PathBuf::from("viewer.json")),
        candidates: Some(Utf8PathBuf::from("candidates.json")),
        major_bio_weight: Some(-0.5),
        ..RankArgs::default()
    };

    let err = RankConfig::try_from(args).expect_err("negative weight should error");
    assert!(
        matches!(
            err,
            CliError::InvalidWeights(WeightsError::Negative { factor: "majorBio" })
        ),
        "expected InvalidWeights, found {err:?}"
    );
}

#[rstest]
#[case::missing_viewer(ARG_VIEWER)]
#[case::missing_candidates(ARG_CANDIDATES)]
fn validate_sources_reports_missing_files(#[case] missing: &'static str) {
    let files = ProfileFiles::with_defaults();
    let mut config = RankConfig::try_from(args_for(&files)).expect("config should build");
    let absent = files.root().join("absent.json");
    if missing == ARG_VIEWER {
        config.viewer = absent;
    } else {
        config.candidates = absent;
    }

    let err = config.validate_sources().expect_err("expected failure");
    assert!(
        matches!(err, CliError::MissingSourceFile { field, .. } if field == missing),
        "expected MissingSourceFile for {missing}, found {err:?}"
    );
}

#[rstest]
fn validate_sources_rejects_directories() {
    let files = ProfileFiles::with_defaults();
    let mut config = RankConfig::try_from(args_for(&files)).expect("config should build");
    config.viewer = files.root().to_path_buf();

    let err = config
        .validate_sources()
        .expect_err("expected directory rejection");
    assert!(
        matches!(err, CliError::SourcePathNotFile { field: ARG_VIEWER, .. }),
        "expected SourcePathNotFile, found {err:?}"
    );
}

#[rstest]
fn load_viewer_decodes_backend_user() {
    let files = ProfileFiles::with_defaults();
    let viewer = load_viewer(&files.viewer()).expect("viewer should decode");
    assert_eq!(viewer.major.as_deref(), Some("Economics"));
    assert_eq!(
        viewer.sports.first().map(|entry| entry.skill_level),
        Some(SkillLevel::Intermediate)
    );
}

#[rstest]
fn load_candidates_rejects_invalid_json() {
    let files = ProfileFiles::new();
    let path = files.candidates();
    write_utf8(&path, b"[{ not valid json");

    let err = load_candidates(&path).expect_err("invalid json should error");
    assert!(
        matches!(
            &err,
            ProfileLoadError::Parse { path: failed, source: ProfileJsonError::Decode { .. } }
                if *failed == path
        ),
        "expected Parse error, found {err:?}"
    );
}

#[rstest]
fn load_viewer_reports_read_errors() {
    let files = ProfileFiles::new();
    let path = files.viewer();

    let err = load_viewer(&path).expect_err("missing viewer should error");
    assert!(
        matches!(&err, ProfileLoadError::Read { path: failed, .. } if *failed == path),
        "expected Read error, found {err:?}"
    );
}

#[rstest]
fn rank_writes_feed_best_first() {
    let files = ProfileFiles::with_defaults();
    let args = RankArgs {
        viewer_id: Some("me".to_owned()),
        ..args_for(&files)
    };
    let mut buffer = Vec::new();

    run_rank_with(args, &mut buffer).expect("rank should succeed");

    let feed: Value = serde_json::from_slice(&buffer).expect("output should be JSON");
    let entries = feed.as_array().expect("feed should be an array");
    let ids: Vec<&str> = entries
        .iter()
        .filter_map(|entry| entry.get("candidateId").and_then(Value::as_str))
        .collect();
    assert_eq!(ids, vec!["u-tennis", "u-golf"]);

    let best = entries.first().expect("feed should not be empty");
    assert_eq!(best.get("displayName").and_then(Value::as_str), Some("Tess"));
    let recommendation = best.get("recommendation").expect("recommendation present");
    assert_eq!(recommendation.get("score").and_then(Value::as_u64), Some(65));
    assert_eq!(
        recommendation
            .get("breakdown")
            .and_then(|breakdown| breakdown.get("collegeYear"))
            .and_then(Value::as_u64),
        Some(100)
    );
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "viewer": 42 }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    assert!(
        matches!(err, CliError::Configuration(_)),
        "expected CliError::Configuration, found {err:?}"
    );
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "viewer": "from-file/viewer.json",
            "candidates": "from-file/candidates.json",
            "sport": "Golf",
        }),
        None,
    );
    composer.push_environment(json!({
        "candidates": "from-env/candidates.json",
        "sport": "Tennis",
    }));
    composer.push_cli(json!({ "sport": "Soccer" }));

    let config = config_from_layers_for_test(composer.layers()).expect("config should merge");

    assert_eq!(config.viewer, Utf8PathBuf::from("from-file/viewer.json"));
    assert_eq!(
        config.candidates,
        Utf8PathBuf::from("from-env/candidates.json")
    );
    assert_eq!(config.filter.sport.as_deref(), Some("Soccer"));
}
