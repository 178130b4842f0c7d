//! Error types emitted by the PokeMe CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use pokeme_core::ProfileJsonError;
use pokeme_scorer::WeightsError;
use thiserror::Error;

/// Failures while reading a profile file from disk.
#[derive(Debug, Error)]
pub enum ProfileLoadError {
    /// The file could not be read.
    #[error("failed to read {path:?}: {source}")]
    Read {
        /// File that failed to open or read.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The file was read but did not contain the expected JSON.
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        /// File holding the malformed payload.
        path: Utf8PathBuf,
        /// Decoding failure.
        #[source]
        source: ProfileJsonError,
    },
}

/// Errors emitted by the PokeMe CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Long flag name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option that named the path.
        field: &'static str,
        /// Path that was not found.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option that named the path.
        field: &'static str,
        /// Path that is not a regular file.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option that named the path.
        field: &'static str,
        /// Path that could not be inspected.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Loading the viewer or candidate profiles failed.
    #[error(transparent)]
    LoadProfile(#[from] ProfileLoadError),
    /// Weight overrides failed validation.
    #[error("invalid factor weights: {0}")]
    InvalidWeights(#[from] WeightsError),
    /// Serialising the ranked feed failed.
    #[error("failed to serialise ranked feed: {0}")]
    SerialiseFeed(#[source] serde_json::Error),
    /// Writing the ranked feed failed.
    #[error("failed to write ranked feed: {0}")]
    WriteFeed(#[source] std::io::Error),
}
