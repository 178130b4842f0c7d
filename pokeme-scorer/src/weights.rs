//! Relative weighting of the four similarity factors.
#![forbid(unsafe_code)]

use pokeme_core::Factor;

use crate::WeightsError;

/// Unweighted per-factor similarities in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FactorScores {
    /// Sports similarity.
    pub sports: f64,
    /// Availability similarity.
    pub availability: f64,
    /// College-year similarity.
    pub college_year: f64,
    /// Major and bio similarity.
    pub major_bio: f64,
}

/// Multipliers applied to each factor before summing.
///
/// The weights are applied as-is rather than normalised, so the defaults
/// (which sum to `1.0`) keep the combined score in `0.0..=1.0`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FactorWeights {
    /// Multiplier for sports similarity.
    pub sports: f64,
    /// Multiplier for availability overlap.
    pub availability: f64,
    /// Multiplier for college-year proximity.
    pub college_year: f64,
    /// Multiplier for major and bio similarity.
    pub major_bio: f64,
}

impl FactorWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`WeightsError`] when a value is not finite, is negative, or
    /// when every weight is zero.
    ///
    /// # Examples
    /// ```
    /// use pokeme_scorer::{FactorWeights, WeightsError};
    ///
    /// assert!(FactorWeights::default().validate().is_ok());
    /// let broken = FactorWeights { sports: -1.0, ..FactorWeights::default() };
    /// assert_eq!(
    ///     broken.validate(),
    ///     Err(WeightsError::Negative { factor: "sports" })
    /// );
    /// ```
    pub fn validate(self) -> Result<Self, WeightsError> {
        for (factor, weight) in self.entries() {
            if !weight.is_finite() {
                return Err(WeightsError::NonFinite {
                    factor: factor.as_str(),
                });
            }
            if weight < 0.0 {
                return Err(WeightsError::Negative {
                    factor: factor.as_str(),
                });
            }
        }
        if self.entries().iter().all(|(_, weight)| *weight == 0.0) {
            return Err(WeightsError::ZeroTotal);
        }
        Ok(self)
    }

    /// Return the weight for a factor.
    #[must_use]
    pub const fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Sports => self.sports,
            Factor::Availability => self.availability,
            Factor::CollegeYear => self.college_year,
            Factor::MajorBio => self.major_bio,
        }
    }

    const fn entries(&self) -> [(Factor, f64); 4] {
        [
            (Factor::Sports, self.sports),
            (Factor::Availability, self.availability),
            (Factor::CollegeYear, self.college_year),
            (Factor::MajorBio, self.major_bio),
        ]
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "score blending requires a weighted sum"
    )]
    pub(crate) fn combine(&self, scores: FactorScores) -> f64 {
        scores.sports * self.sports
            + scores.availability * self.availability
            + scores.college_year * self.college_year
            + scores.major_bio * self.major_bio
    }
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            sports: 0.55,
            availability: 0.20,
            college_year: 0.10,
            major_bio: 0.15,
        }
    }
}

#[cfg(test)]
#[expect(
    clippy::float_arithmetic,
    reason = "tests compare floating point values"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_sum_to_one() {
        let weights = FactorWeights::default();
        let total: f64 = Factor::ALL.iter().map(|factor| weights.get(*factor)).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[rstest]
    fn weights_reject_zero_total() {
        let err = FactorWeights {
            sports: 0.0,
            availability: 0.0,
            college_year: 0.0,
            major_bio: 0.0,
        }
        .validate()
        .expect_err("zero weights should be invalid");
        assert_eq!(err, WeightsError::ZeroTotal);
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn weights_reject_non_finite(#[case] value: f64) {
        let err = FactorWeights {
            major_bio: value,
            ..FactorWeights::default()
        }
        .validate()
        .expect_err("non-finite weight should be invalid");
        assert_eq!(err, WeightsError::NonFinite { factor: "majorBio" });
    }

    #[rstest]
    fn single_factor_weights_are_valid() {
        let weights = FactorWeights {
            sports: 1.0,
            availability: 0.0,
            college_year: 0.0,
            major_bio: 0.0,
        };
        assert_eq!(weights.validate(), Ok(weights));
    }

    #[rstest]
    fn combine_applies_each_weight() {
        let scores = FactorScores {
            sports: 0.65,
            availability: 0.5,
            college_year: 1.0,
            major_bio: 0.6,
        };
        let combined = FactorWeights::default().combine(scores);
        assert!((combined - 0.6475).abs() < 1e-9);
    }
}
