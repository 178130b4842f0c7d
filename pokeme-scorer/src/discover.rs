//! Discovery feed assembly: filter candidates, score them, and rank them.
//!
//! Exclusion state (already-poked and already-matched users) is owned by the
//! caller and passed in through [`DiscoverFilter`]; nothing here remembers
//! anything between calls.

use std::collections::HashSet;

use log::{debug, warn};
use pokeme_core::{Candidate, CompatibilityScorer, Profile, ScoreResult};
use rayon::prelude::*;

/// Which candidates may appear in a viewer's feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoverFilter {
    /// The viewer's own id, never shown to themselves.
    pub viewer_id: Option<String>,
    /// Ids the viewer already poked or matched with.
    pub excluded: HashSet<String>,
    /// Only keep candidates who play this sport (case-insensitive).
    pub sport: Option<String>,
}

impl DiscoverFilter {
    /// Construct a filter that admits everyone.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the viewer's id while returning `self` for chaining.
    #[must_use]
    pub fn with_viewer_id(mut self, id: impl Into<String>) -> Self {
        self.viewer_id = Some(id.into());
        self
    }

    /// Exclude ids while returning `self` for chaining.
    #[must_use]
    pub fn excluding<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Restrict the feed to one sport while returning `self` for chaining.
    ///
    /// Blank sport names leave the feed unrestricted.
    #[must_use]
    pub fn with_sport(mut self, sport: impl Into<String>) -> Self {
        let name: String = sport.into();
        self.sport = (!name.trim().is_empty()).then_some(name);
        self
    }

    /// Report whether `candidate` may appear in the feed.
    ///
    /// # Examples
    /// ```
    /// use pokeme_core::{Candidate, Profile, SkillLevel};
    /// use pokeme_scorer::DiscoverFilter;
    ///
    /// let filter = DiscoverFilter::new()
    ///     .with_viewer_id("me")
    ///     .excluding(["poked"])
    ///     .with_sport("Tennis");
    /// let player = Profile::new().with_sport("tennis", SkillLevel::Beginner);
    ///
    /// assert!(filter.admits(&Candidate::new("u-1", "Ana", player.clone())));
    /// assert!(!filter.admits(&Candidate::new("me", "Me", player.clone())));
    /// assert!(!filter.admits(&Candidate::new("poked", "Bo", player)));
    /// assert!(!filter.admits(&Candidate::new("u-2", "Cy", Profile::new())));
    /// ```
    #[must_use]
    pub fn admits(&self, candidate: &Candidate) -> bool {
        if self.viewer_id.as_deref() == Some(candidate.id.as_str()) {
            return false;
        }
        if self.excluded.contains(&candidate.id) {
            return false;
        }
        self.sport
            .as_deref()
            .is_none_or(|sport| candidate.profile.plays(sport))
    }
}

/// A candidate paired with its score for the current viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedCandidate {
    /// The scored candidate.
    pub candidate: Candidate,
    /// Score, reasons, and breakdown for this viewer.
    pub recommendation: ScoreResult,
}

impl RankedCandidate {
    /// The candidate's id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.candidate.id
    }

    /// The candidate's overall score.
    #[must_use]
    pub const fn score(&self) -> u8 {
        self.recommendation.score()
    }
}

/// Keep only the candidates `filter` admits, preserving input order.
#[must_use]
pub fn select_candidates(filter: &DiscoverFilter, candidates: Vec<Candidate>) -> Vec<Candidate> {
    let offered = candidates.len();
    let selected: Vec<Candidate> = candidates
        .into_iter()
        .filter(|candidate| filter.admits(candidate))
        .collect();
    debug!(
        "discover filter kept {} of {offered} candidates",
        selected.len()
    );
    if offered > 0
        && selected.is_empty()
        && let Some(sport) = filter.sport.as_deref()
    {
        warn!("no candidates remain after filtering for sport '{sport}'");
    }
    selected
}

/// Score every candidate for `viewer` and order them best first.
///
/// Candidates are scored in parallel. The sort is stable, so candidates with
/// equal scores keep their input order.
///
/// # Examples
/// ```
/// use pokeme_core::{Candidate, Profile, SkillLevel};
/// use pokeme_scorer::{HeuristicScorer, rank_candidates};
///
/// let viewer = Profile::new().with_sport("Soccer", SkillLevel::Intermediate);
/// let candidates = vec![
///     Candidate::new("swimmer", "Sky", Profile::new().with_sport("Swimming", SkillLevel::Beginner)),
///     Candidate::new("striker", "Sol", Profile::new().with_sport("soccer", SkillLevel::Advanced)),
/// ];
///
/// let ranked = rank_candidates(&HeuristicScorer::new(), &viewer, candidates);
/// assert_eq!(ranked[0].id(), "striker");
/// assert!(ranked[0].score() >= ranked[1].score());
/// ```
#[must_use]
pub fn rank_candidates<S>(
    scorer: &S,
    viewer: &Profile,
    candidates: Vec<Candidate>,
) -> Vec<RankedCandidate>
where
    S: CompatibilityScorer + ?Sized,
{
    let mut ranked: Vec<RankedCandidate> = candidates
        .into_par_iter()
        .map(|candidate| {
            let recommendation = scorer.score(viewer, &candidate.profile);
            debug!(
                "scored candidate {} at {}",
                candidate.id,
                recommendation.score()
            );
            RankedCandidate {
                candidate,
                recommendation,
            }
        })
        .collect();
    ranked.sort_by(|a, b| b.score().cmp(&a.score()));
    ranked
}

/// Filter, score, and rank a viewer's discovery feed.
#[must_use]
pub fn discover<S>(
    scorer: &S,
    viewer: &Profile,
    filter: &DiscoverFilter,
    candidates: Vec<Candidate>,
) -> Vec<RankedCandidate>
where
    S: CompatibilityScorer + ?Sized,
{
    rank_candidates(scorer, viewer, select_candidates(filter, candidates))
}
