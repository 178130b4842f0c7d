//! Command-line interface for ranking a PokeMe discovery feed offline.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod rank;

pub use error::{CliError, ProfileLoadError};

use rank::{RankArgs, run_rank};

pub(crate) const ARG_VIEWER: &str = "viewer";
pub(crate) const ARG_CANDIDATES: &str = "candidates";
pub(crate) const ARG_VIEWER_ID: &str = "viewer-id";
pub(crate) const ARG_EXCLUDE: &str = "exclude";
pub(crate) const ARG_SPORT: &str = "sport";
pub(crate) const ARG_SPORTS_WEIGHT: &str = "sports-weight";
pub(crate) const ARG_AVAILABILITY_WEIGHT: &str = "availability-weight";
pub(crate) const ARG_COLLEGE_YEAR_WEIGHT: &str = "college-year-weight";
pub(crate) const ARG_MAJOR_BIO_WEIGHT: &str = "major-bio-weight";
pub(crate) const ENV_VIEWER: &str = "POKEME_CMDS_RANK_VIEWER";
pub(crate) const ENV_CANDIDATES: &str = "POKEME_CMDS_RANK_CANDIDATES";

/// Run the PokeMe CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments fail to parse, configuration cannot
/// be resolved, inputs cannot be loaded, or the feed cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rank(args) => run_rank(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "pokeme",
    about = "Offline tooling for the PokeMe partner-matching engine",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score and rank candidates for a viewer.
    Rank(RankArgs),
}

#[cfg(test)]
mod tests;
