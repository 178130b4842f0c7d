//! Facade crate for the PokeMe partner-matching engine.
//!
//! This crate re-exports the core domain types and exposes the heuristic
//! scorer and discovery ranking behind the `scorer` feature.

#![forbid(unsafe_code)]

pub use pokeme_core::{
    Availability, Breakdown, Candidate, CollegeYear, CompatibilityScorer, FALLBACK_REASON, Factor,
    Profile, ScoreResult, SkillLevel, SportEntry, UnknownCollegeYear, percent,
};

#[cfg(feature = "serde")]
pub use pokeme_core::{ProfileJsonError, candidates_from_json, profile_from_json};

#[cfg(feature = "scorer")]
pub use pokeme_scorer::{
    DiscoverFilter, FactorWeights, HeuristicScorer, RankedCandidate, WeightsError, discover,
    rank_candidates, select_candidates,
};
