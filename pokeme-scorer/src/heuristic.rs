//! Fixed-formula compatibility scorer used by the discovery feed.

use pokeme_core::{Breakdown, CompatibilityScorer, Profile, ScoreResult, percent};

use crate::{
    FactorScores, FactorWeights, WeightsError, availability_similarity, college_year_reason,
    college_year_similarity, major_bio_similarity, sports_similarity,
};

/// Scorer combining sports, availability, college-year, and major/bio
/// similarity with fixed weights.
///
/// The scorer holds no state beyond its weights; every call works only on its
/// two arguments, so one instance can score a feed from many threads.
///
/// # Examples
/// ```
/// use pokeme_core::{CompatibilityScorer, Profile, SkillLevel};
/// use pokeme_scorer::HeuristicScorer;
///
/// let viewer = Profile::new().with_sport("Tennis", SkillLevel::Beginner);
/// let candidate = Profile::new().with_sport("tennis", SkillLevel::Beginner);
/// let result = HeuristicScorer::new().score(&viewer, &candidate);
/// assert_eq!(result.breakdown().sports, 100);
/// assert_eq!(result.score(), 55);
/// assert_eq!(result.reasons(), ["Shared sports: tennis"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeuristicScorer {
    weights: FactorWeights,
}

impl HeuristicScorer {
    /// Construct a scorer with the default weights.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a scorer with custom weights.
    ///
    /// # Errors
    /// Returns [`WeightsError`] when the weights fail validation.
    pub fn with_weights(weights: FactorWeights) -> Result<Self, WeightsError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// Return the weights in use.
    #[must_use]
    pub const fn weights(&self) -> FactorWeights {
        self.weights
    }
}

impl CompatibilityScorer for HeuristicScorer {
    fn score(&self, viewer: &Profile, candidate: &Profile) -> ScoreResult {
        let sports = sports_similarity(&viewer.sports, &candidate.sports);
        let availability = availability_similarity(&viewer.availability, &candidate.availability);
        let college_year = college_year_similarity(
            viewer.college_year.as_deref(),
            candidate.college_year.as_deref(),
        );
        let major_bio = major_bio_similarity(viewer, candidate);

        let scores = FactorScores {
            sports: sports.score,
            availability: availability.score,
            college_year,
            major_bio: major_bio.score,
        };
        let breakdown = Breakdown {
            sports: percent(scores.sports),
            availability: percent(scores.availability),
            college_year: percent(scores.college_year),
            major_bio: percent(scores.major_bio),
        };

        let reasons: Vec<String> = sports
            .reason()
            .into_iter()
            .chain(availability.reason().map(str::to_owned))
            .chain(college_year_reason(college_year).map(str::to_owned))
            .chain(major_bio.reason().map(str::to_owned))
            .collect();

        ScoreResult::new(percent(self.weights.combine(scores)), reasons, breakdown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokeme_core::{FALLBACK_REASON, SkillLevel};
    use rstest::{fixture, rstest};

    #[fixture]
    fn scorer() -> HeuristicScorer {
        HeuristicScorer::new()
    }

    #[fixture]
    fn viewer() -> Profile {
        Profile::new()
            .with_sport("Tennis", SkillLevel::Intermediate)
            .with_availability("Monday", ["Morning"])
            .with_college_year("junior")
            .with_major("Economics")
            .with_bio("")
    }

    #[rstest]
    fn end_to_end_breakdown(scorer: HeuristicScorer, viewer: Profile) {
        let candidate = Profile::new()
            .with_sport("Tennis", SkillLevel::Intermediate)
            .with_sport("Soccer", SkillLevel::Beginner)
            .with_availability("Monday", ["Morning"])
            .with_availability("Tuesday", ["Evening"])
            .with_college_year("junior")
            .with_major("Economics")
            .with_bio("");

        let result = scorer.score(&viewer, &candidate);

        assert_eq!(
            *result.breakdown(),
            Breakdown {
                sports: 65,
                availability: 50,
                college_year: 100,
                major_bio: 60,
            }
        );
        assert_eq!(result.score(), 65);
        assert_eq!(
            result.reasons(),
            [
                "Shared sports: tennis",
                "Overlapping availability windows",
                "Similar college year",
                "Same major",
            ]
        );
    }

    #[rstest]
    fn unrelated_profiles_fall_back(scorer: HeuristicScorer, viewer: Profile) {
        let candidate = Profile::new()
            .with_sport("Golf", SkillLevel::Advanced)
            .with_availability("Friday", ["Night"])
            .with_college_year("graduate")
            .with_major("Biology");

        let result = scorer.score(&viewer, &candidate);

        // junior vs graduate is two steps apart: 30% similar, no reason.
        assert_eq!(result.breakdown().college_year, 30);
        assert_eq!(result.reasons(), [FALLBACK_REASON]);
        assert_eq!(result.score(), 3);
    }

    #[rstest]
    fn empty_profiles_report_every_factor(scorer: HeuristicScorer) {
        let result = scorer.score(&Profile::new(), &Profile::new());
        assert_eq!(*result.breakdown(), Breakdown::default());
        assert_eq!(result.score(), 0);
        assert_eq!(result.reasons().len(), 1);
    }

    #[rstest]
    fn custom_weights_change_the_total(viewer: Profile) {
        let sports_only = HeuristicScorer::with_weights(FactorWeights {
            sports: 1.0,
            availability: 0.0,
            college_year: 0.0,
            major_bio: 0.0,
        })
        .expect("valid weights");
        let candidate = Profile::new().with_sport("tennis", SkillLevel::Intermediate);

        let result = sports_only.score(&viewer, &candidate);

        assert_eq!(result.score(), 100);
        assert_eq!(result.breakdown().sports, 100);
    }

    #[rstest]
    fn invalid_weights_are_rejected() {
        let err = HeuristicScorer::with_weights(FactorWeights {
            availability: f64::NAN,
            ..FactorWeights::default()
        })
        .expect_err("NaN weight should be rejected");
        assert_eq!(err, WeightsError::NonFinite { factor: "availability" });
    }

    #[rstest]
    fn scoring_is_deterministic(scorer: HeuristicScorer, viewer: Profile) {
        let candidate = Profile::new()
            .with_sport("Tennis", SkillLevel::Advanced)
            .with_availability("Monday", ["Morning"]);
        assert_eq!(
            scorer.score(&viewer, &candidate),
            scorer.score(&viewer, &candidate)
        );
    }
}
