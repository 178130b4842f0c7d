//! Rank command implementation for the PokeMe CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use pokeme_core::{Candidate, Profile, ScoreResult, candidates_from_json, profile_from_json};
use pokeme_scorer::{DiscoverFilter, FactorWeights, HeuristicScorer, RankedCandidate, discover};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::{
    ARG_AVAILABILITY_WEIGHT, ARG_CANDIDATES, ARG_COLLEGE_YEAR_WEIGHT, ARG_EXCLUDE,
    ARG_MAJOR_BIO_WEIGHT, ARG_SPORT, ARG_SPORTS_WEIGHT, ARG_VIEWER, ARG_VIEWER_ID, CliError,
    ENV_CANDIDATES, ENV_VIEWER, ProfileLoadError, fs,
};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score every candidate against the viewer and print the \
                 feed best match first. The viewer is a single user JSON \
                 object and the candidates a JSON array of users. Paths and \
                 filters can come from CLI flags, configuration files, or \
                 environment variables.",
    about = "Rank candidates for a viewer"
)]
#[ortho_config(prefix = "POKEME")]
pub(crate) struct RankArgs {
    /// Path to the viewer's user JSON.
    #[arg(long = ARG_VIEWER, value_name = "path")]
    #[serde(default)]
    pub(crate) viewer: Option<Utf8PathBuf>,
    /// Path to a JSON array of candidate users.
    #[arg(long = ARG_CANDIDATES, value_name = "path")]
    #[serde(default)]
    pub(crate) candidates: Option<Utf8PathBuf>,
    /// The viewer's own user id, removed from the feed.
    #[arg(long = ARG_VIEWER_ID, value_name = "id")]
    #[serde(default)]
    pub(crate) viewer_id: Option<String>,
    /// Ids already poked or matched; may be repeated.
    #[arg(long = ARG_EXCLUDE, value_name = "id")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) exclude: Vec<String>,
    /// Only keep candidates who play this sport.
    #[arg(long = ARG_SPORT, value_name = "name")]
    #[serde(default)]
    pub(crate) sport: Option<String>,
    /// Override the sports weight (default 0.55).
    #[arg(long = ARG_SPORTS_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) sports_weight: Option<f64>,
    /// Override the availability weight (default 0.20).
    #[arg(long = ARG_AVAILABILITY_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) availability_weight: Option<f64>,
    /// Override the college-year weight (default 0.10).
    #[arg(long = ARG_COLLEGE_YEAR_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) college_year_weight: Option<f64>,
    /// Override the major and bio weight (default 0.15).
    #[arg(long = ARG_MAJOR_BIO_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) major_bio_weight: Option<f64>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankConfig {
    /// Path to the viewer JSON file.
    pub(crate) viewer: Utf8PathBuf,
    /// Path to the candidates JSON file.
    pub(crate) candidates: Utf8PathBuf,
    /// Which candidates may appear in the feed.
    pub(crate) filter: DiscoverFilter,
    /// Validated factor weights.
    pub(crate) weights: FactorWeights,
}

impl RankConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.viewer, ARG_VIEWER)?;
        Self::require_existing(&self.candidates, ARG_CANDIDATES)?;
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let viewer = args.viewer.ok_or(CliError::MissingArgument {
            field: ARG_VIEWER,
            env: ENV_VIEWER,
        })?;
        let candidates = args.candidates.ok_or(CliError::MissingArgument {
            field: ARG_CANDIDATES,
            env: ENV_CANDIDATES,
        })?;

        let defaults = FactorWeights::default();
        let weights = FactorWeights {
            sports: args.sports_weight.unwrap_or(defaults.sports),
            availability: args.availability_weight.unwrap_or(defaults.availability),
            college_year: args.college_year_weight.unwrap_or(defaults.college_year),
            major_bio: args.major_bio_weight.unwrap_or(defaults.major_bio),
        }
        .validate()?;

        let mut filter = DiscoverFilter::new().excluding(args.exclude);
        if let Some(id) = args.viewer_id {
            filter = filter.with_viewer_id(id);
        }
        if let Some(sport) = args.sport {
            filter = filter.with_sport(sport);
        }

        Ok(Self {
            viewer,
            candidates,
            filter,
            weights,
        })
    }
}

/// One line of the printed feed.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FeedEntry<'a> {
    candidate_id: &'a str,
    display_name: &'a str,
    recommendation: &'a ScoreResult,
}

impl<'a> From<&'a RankedCandidate> for FeedEntry<'a> {
    fn from(ranked: &'a RankedCandidate) -> Self {
        Self {
            candidate_id: &ranked.candidate.id,
            display_name: &ranked.candidate.display_name,
            recommendation: &ranked.recommendation,
        }
    }
}

pub(super) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rank_with(args, &mut stdout)
}

pub(super) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let feed = execute_rank(args)?;
    write_feed(writer, &feed)
}

fn execute_rank(args: RankArgs) -> Result<Vec<RankedCandidate>, CliError> {
    let config = resolve_rank_config(args)?;
    let viewer = load_viewer(&config.viewer)?;
    let candidates = load_candidates(&config.candidates)?;
    debug!(
        "ranking {} candidates from {}",
        candidates.len(),
        config.candidates
    );
    let scorer = HeuristicScorer::with_weights(config.weights)?;
    Ok(discover(&scorer, &viewer, &config.filter, candidates))
}

fn resolve_rank_config(args: RankArgs) -> Result<RankConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn read_source(path: &Utf8Path) -> Result<String, ProfileLoadError> {
    fs::read_utf8_file(path).map_err(|source| ProfileLoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the viewer's profile from a user JSON file.
pub(super) fn load_viewer(path: &Utf8Path) -> Result<Profile, ProfileLoadError> {
    let payload = read_source(path)?;
    profile_from_json(&payload).map_err(|source| ProfileLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads candidates from a JSON array of users.
pub(super) fn load_candidates(path: &Utf8Path) -> Result<Vec<Candidate>, ProfileLoadError> {
    let payload = read_source(path)?;
    candidates_from_json(&payload).map_err(|source| ProfileLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn write_feed(writer: &mut dyn Write, feed: &[RankedCandidate]) -> Result<(), CliError> {
    let entries: Vec<FeedEntry<'_>> = feed.iter().map(FeedEntry::from).collect();
    let payload = serde_json::to_string_pretty(&entries).map_err(CliError::SerialiseFeed)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteFeed)?;
    writer.write_all(b"\n").map_err(CliError::WriteFeed)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
