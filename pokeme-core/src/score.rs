//! Output of a compatibility scoring pass.

/// Reason emitted when no individual factor produced one.
pub const FALLBACK_REASON: &str = "Recommended from overall profile compatibility";

/// The independent similarity factors that make up a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Factor {
    /// Shared sports and skill alignment.
    Sports,
    /// Overlapping weekly availability.
    Availability,
    /// Proximity of college years.
    CollegeYear,
    /// Same major and shared vocabulary in major and bio.
    MajorBio,
}

impl Factor {
    /// All factors in reporting order.
    pub const ALL: [Self; 4] = [
        Self::Sports,
        Self::Availability,
        Self::CollegeYear,
        Self::MajorBio,
    ];

    /// Key used in serialised breakdowns.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sports => "sports",
            Self::Availability => "availability",
            Self::CollegeYear => "collegeYear",
            Self::MajorBio => "majorBio",
        }
    }
}

impl std::fmt::Display for Factor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-factor similarity on a `0..=100` scale, before weighting.
///
/// Every factor is always present; a factor without signal reports `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct Breakdown {
    /// Sports similarity.
    pub sports: u8,
    /// Availability similarity.
    pub availability: u8,
    /// College-year similarity.
    pub college_year: u8,
    /// Major and bio similarity.
    pub major_bio: u8,
}

impl Breakdown {
    /// Return the value recorded for `factor`.
    ///
    /// # Examples
    /// ```
    /// use pokeme_core::{Breakdown, Factor};
    ///
    /// let breakdown = Breakdown { sports: 65, ..Breakdown::default() };
    /// assert_eq!(breakdown.get(Factor::Sports), 65);
    /// assert_eq!(breakdown.get(Factor::MajorBio), 0);
    /// ```
    #[must_use]
    pub const fn get(&self, factor: Factor) -> u8 {
        match factor {
            Factor::Sports => self.sports,
            Factor::Availability => self.availability,
            Factor::CollegeYear => self.college_year,
            Factor::MajorBio => self.major_bio,
        }
    }

    /// Iterate over `(factor, value)` pairs in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (Factor, u8)> + '_ {
        Factor::ALL.into_iter().map(|factor| (factor, self.get(factor)))
    }
}

/// Ranking score, explanations, and per-factor breakdown for one candidate.
///
/// Constructed fresh for every scoring call and never stored on the profile.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScoreResult {
    score: u8,
    reasons: Vec<String>,
    breakdown: Breakdown,
}

impl ScoreResult {
    /// Assemble a result.
    ///
    /// `score` is capped at `100`. An empty `reasons` list is replaced by
    /// [`FALLBACK_REASON`] so callers always have something to display.
    ///
    /// # Examples
    /// ```
    /// use pokeme_core::{Breakdown, FALLBACK_REASON, ScoreResult};
    ///
    /// let result = ScoreResult::new(12, Vec::new(), Breakdown::default());
    /// assert_eq!(result.reasons(), [FALLBACK_REASON]);
    /// ```
    #[must_use]
    pub fn new(score: u8, mut reasons: Vec<String>, breakdown: Breakdown) -> Self {
        if reasons.is_empty() {
            reasons.push(FALLBACK_REASON.to_owned());
        }
        Self {
            score: score.min(100),
            reasons,
            breakdown,
        }
    }

    /// Overall weighted score in `0..=100`.
    #[must_use]
    pub const fn score(&self) -> u8 {
        self.score
    }

    /// Human-readable reasons, never empty.
    #[must_use]
    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    /// Unweighted per-factor similarities.
    #[must_use]
    pub const fn breakdown(&self) -> &Breakdown {
        &self.breakdown
    }
}

/// Convert a similarity fraction into a rounded `0..=100` percentage.
///
/// Non-finite input yields `0` and values are clamped to `0.0..=1.0` first.
///
/// # Examples
/// ```
/// use pokeme_core::percent;
///
/// assert_eq!(percent(0.6475), 65);
/// assert_eq!(percent(1.7), 100);
/// assert_eq!(percent(f64::NAN), 0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the clamped fraction scales into 0..=100 before the cast"
)]
pub fn percent(fraction: f64) -> u8 {
    if !fraction.is_finite() {
        return 0;
    }
    (fraction.clamp(0.0, 1.0) * 100.0).round() as u8
}
