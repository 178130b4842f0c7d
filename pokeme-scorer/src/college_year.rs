//! College-year similarity: closeness in the year vocabulary.

use pokeme_core::CollegeYear;

const STEP_PENALTY: f64 = 0.35;
const SIMILAR_THRESHOLD: f64 = 0.65;

/// Compare two free-text college years.
///
/// Each vocabulary step apart costs `0.35`, so adjacent years score `0.65`
/// and years four steps apart score `0.0`. Missing or unrecognised years
/// score `0.0`.
///
/// # Examples
/// ```
/// use pokeme_scorer::college_year_similarity;
///
/// assert!((college_year_similarity(Some("Junior"), Some("junior")) - 1.0).abs() < 1e-9);
/// assert!(college_year_similarity(Some("junior"), Some("alumni")).abs() < 1e-9);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "similarity decays linearly with year distance"
)]
pub fn college_year_similarity(viewer: Option<&str>, candidate: Option<&str>) -> f64 {
    let (Some(ours), Some(theirs)) = (
        CollegeYear::parse_optional(viewer),
        CollegeYear::parse_optional(candidate),
    ) else {
        return 0.0;
    };
    let distance = f64::from(ours.distance(theirs));
    (1.0 - STEP_PENALTY * distance).max(0.0)
}

/// Reason line emitted when the years are close enough to mention.
#[must_use]
pub fn college_year_reason(similarity: f64) -> Option<&'static str> {
    (similarity >= SIMILAR_THRESHOLD).then_some("Similar college year")
}

#[cfg(test)]
#[expect(
    clippy::float_arithmetic,
    reason = "tests compare floating point values"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TOLERANCE: f64 = 1e-9;

    #[rstest]
    #[case("freshman", "freshman", 1.0)]
    #[case("freshman", "sophomore", 0.65)]
    #[case("freshman", "junior", 0.3)]
    #[case("freshman", "senior", 0.0)]
    #[case("freshman", "graduate", 0.0)]
    #[case("Senior", "GRADUATE", 0.65)]
    fn similarity_by_distance(#[case] ours: &str, #[case] theirs: &str, #[case] expected: f64) {
        let similarity = college_year_similarity(Some(ours), Some(theirs));
        assert!((similarity - expected).abs() < TOLERANCE);
    }

    #[rstest]
    #[case(None, Some("junior"))]
    #[case(Some("junior"), None)]
    #[case(Some("junior"), Some("fifth year"))]
    #[case(Some(""), Some(""))]
    fn missing_or_unknown_years_score_zero(#[case] ours: Option<&str>, #[case] theirs: Option<&str>) {
        assert!(college_year_similarity(ours, theirs).abs() < TOLERANCE);
    }

    #[rstest]
    fn adjacent_years_are_similar() {
        let similarity = college_year_similarity(Some("junior"), Some("senior"));
        assert_eq!(college_year_reason(similarity), Some("Similar college year"));
    }

    #[rstest]
    fn two_years_apart_are_not_similar() {
        let similarity = college_year_similarity(Some("sophomore"), Some("senior"));
        assert_eq!(college_year_reason(similarity), None);
    }
}
