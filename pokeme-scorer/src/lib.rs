//! Heuristic compatibility scoring for the PokeMe discovery feed.
//!
//! The crate compares a viewer's [`Profile`](pokeme_core::Profile) with each
//! candidate's on four independent factors and blends them with fixed
//! weights:
//! - **Sports** (55%): shared sports, weighted by how closely skill levels
//!   line up.
//! - **Availability** (20%): Jaccard overlap of weekly `day:slot` windows.
//! - **College year** (10%): distance in the freshman-to-graduate vocabulary.
//! - **Major and bio** (15%): exact major match plus shared vocabulary.
//!
//! [`HeuristicScorer`] implements
//! [`CompatibilityScorer`](pokeme_core::CompatibilityScorer); [`discover`]
//! filters, scores, and ranks a whole feed.
//!
//! # Examples
//!
//! ```
//! use pokeme_core::{Candidate, Profile, SkillLevel};
//! use pokeme_scorer::{DiscoverFilter, HeuristicScorer, discover};
//!
//! let viewer = Profile::new()
//!     .with_sport("Basketball", SkillLevel::Intermediate)
//!     .with_availability("Wednesday", ["Evening"]);
//! let feed = vec![
//!     Candidate::new("u-1", "Riley", Profile::new().with_sport("Basketball", SkillLevel::Advanced)),
//!     Candidate::new("u-2", "Jordan", Profile::new().with_availability("Wednesday", ["Evening"])),
//! ];
//! let filter = DiscoverFilter::new().with_viewer_id("viewer").excluding(["u-9"]);
//!
//! let ranked = discover(&HeuristicScorer::new(), &viewer, &filter, feed);
//! assert_eq!(ranked.len(), 2);
//! assert_eq!(ranked[0].id(), "u-1");
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod availability;
mod college_year;
mod discover;
mod error;
mod heuristic;
mod major_bio;
mod similarity;
mod sports;
mod weights;

pub use availability::{AvailabilityMatch, availability_similarity};
pub use college_year::{college_year_reason, college_year_similarity};
pub use discover::{DiscoverFilter, RankedCandidate, discover, rank_candidates, select_candidates};
pub use error::WeightsError;
pub use heuristic::HeuristicScorer;
pub use major_bio::{MajorBioMatch, major_bio_similarity, tokenize};
pub use sports::{SportsMatch, sports_similarity};
pub use weights::{FactorScores, FactorWeights};
