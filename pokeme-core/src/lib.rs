//! Core domain types for the PokeMe partner-matching engine.
//!
//! Profiles describe what a player plays, when they are free, and a little
//! about their studies. Scorers turn a viewer and a candidate profile into a
//! [`ScoreResult`] used to order the discovery feed.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod college_year;
#[cfg(feature = "serde")]
pub mod json;
pub mod profile;
pub mod score;
pub mod scorer;
pub mod skill;

pub use college_year::{CollegeYear, UnknownCollegeYear};
#[cfg(feature = "serde")]
pub use json::{ProfileJsonError, candidates_from_json, profile_from_json};
pub use profile::{Availability, Candidate, Profile, SportEntry};
pub use score::{Breakdown, FALLBACK_REASON, Factor, ScoreResult, percent};
pub use scorer::CompatibilityScorer;
pub use skill::SkillLevel;
