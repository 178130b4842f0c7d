//! Sports similarity: how many sports two players share and how closely
//! their levels line up.

use std::collections::{BTreeSet, HashMap};

use pokeme_core::SportEntry;

const COVERAGE_SHARE: f64 = 0.7;
const ALIGNMENT_SHARE: f64 = 0.3;
const SKILL_GAP_PENALTY: f64 = 0.25;
const MAX_LISTED_SPORTS: usize = 3;

/// Outcome of comparing two sports lists.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SportsMatch {
    /// Similarity in `0.0..=1.0`.
    pub score: f64,
    /// Lowercased sport names both players list, in lexicographic order.
    pub shared: Vec<String>,
}

impl SportsMatch {
    /// Reason line naming up to three shared sports, if any are shared.
    #[must_use]
    pub fn reason(&self) -> Option<String> {
        if self.shared.is_empty() {
            return None;
        }
        let listed: Vec<&str> = self
            .shared
            .iter()
            .take(MAX_LISTED_SPORTS)
            .map(String::as_str)
            .collect();
        Some(format!("Shared sports: {}", listed.join(", ")))
    }
}

/// Compare two sports lists.
///
/// Coverage is the shared count over the larger of the two lists, not over
/// their union. Alignment averages `1 - 0.25 * |level gap|` across shared
/// sports. The result blends 70% coverage with 30% alignment.
///
/// # Examples
/// ```
/// use pokeme_core::{SkillLevel, SportEntry};
/// use pokeme_scorer::sports_similarity;
///
/// let viewer = [SportEntry::new("Tennis", SkillLevel::Intermediate)];
/// let candidate = [
///     SportEntry::new("tennis", SkillLevel::Intermediate),
///     SportEntry::new("Soccer", SkillLevel::Beginner),
/// ];
/// let matched = sports_similarity(&viewer, &candidate);
/// assert_eq!(matched.shared, vec!["tennis".to_owned()]);
/// assert!((matched.score - 0.65).abs() < 1e-9);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "coverage and alignment are ratios of small counts"
)]
pub fn sports_similarity(viewer: &[SportEntry], candidate: &[SportEntry]) -> SportsMatch {
    let viewer_levels = skill_map(viewer);
    let candidate_levels = skill_map(candidate);
    if viewer_levels.is_empty() || candidate_levels.is_empty() {
        return SportsMatch::default();
    }

    let shared: BTreeSet<&String> = viewer_levels
        .keys()
        .filter(|sport| candidate_levels.contains_key(*sport))
        .collect();
    if shared.is_empty() {
        return SportsMatch::default();
    }

    let largest = viewer_levels.len().max(candidate_levels.len());
    let coverage = shared.len() as f64 / largest as f64;
    let alignment_total: f64 = shared
        .iter()
        .filter_map(|sport| {
            let ours = viewer_levels.get(*sport)?;
            let theirs = candidate_levels.get(*sport)?;
            Some(level_alignment(*ours, *theirs))
        })
        .sum();
    let alignment = alignment_total / shared.len() as f64;

    SportsMatch {
        score: (COVERAGE_SHARE * coverage + ALIGNMENT_SHARE * alignment).min(1.0),
        shared: shared.into_iter().cloned().collect(),
    }
}

/// Map lowercased sport names to level ranks; later duplicates win.
fn skill_map(entries: &[SportEntry]) -> HashMap<String, u8> {
    entries
        .iter()
        .filter_map(|entry| {
            let name = entry.sport.trim().to_lowercase();
            (!name.is_empty()).then_some((name, entry.skill_level.rank()))
        })
        .collect()
}

#[expect(
    clippy::float_arithmetic,
    reason = "alignment decays linearly with the level gap"
)]
fn level_alignment(ours: u8, theirs: u8) -> f64 {
    let gap = f64::from(ours.abs_diff(theirs));
    (1.0 - SKILL_GAP_PENALTY * gap).max(0.0)
}

#[cfg(test)]
#[expect(
    clippy::float_arithmetic,
    reason = "tests compare floating point values"
)]
mod tests {
    use super::*;
    use pokeme_core::SkillLevel;
    use rstest::rstest;

    const TOLERANCE: f64 = 1e-9;

    fn entries(items: &[(&str, SkillLevel)]) -> Vec<SportEntry> {
        items
            .iter()
            .map(|&(name, level)| SportEntry::new(name, level))
            .collect()
    }

    #[rstest]
    #[case(1, 1, 1.0)]
    #[case(1, 2, 0.75)]
    #[case(1, 3, 0.5)]
    #[case(3, 1, 0.5)]
    fn alignment_decays_with_gap(#[case] ours: u8, #[case] theirs: u8, #[case] expected: f64) {
        assert!((level_alignment(ours, theirs) - expected).abs() < TOLERANCE);
    }

    #[rstest]
    fn alignment_floors_at_zero() {
        assert!(level_alignment(0, 4).abs() < TOLERANCE);
        assert!(level_alignment(0, 9).abs() < TOLERANCE);
    }

    #[rstest]
    fn identical_single_sport_scores_full() {
        let viewer = entries(&[("Tennis", SkillLevel::Advanced)]);
        let matched = sports_similarity(&viewer, &viewer);
        assert!((matched.score - 1.0).abs() < TOLERANCE);
    }

    #[rstest]
    fn empty_lists_have_no_signal() {
        let viewer = entries(&[("Tennis", SkillLevel::Advanced)]);
        assert_eq!(sports_similarity(&viewer, &[]), SportsMatch::default());
        assert_eq!(sports_similarity(&[], &viewer), SportsMatch::default());
    }

    #[rstest]
    fn disjoint_lists_have_no_signal() {
        let viewer = entries(&[("Tennis", SkillLevel::Advanced)]);
        let candidate = entries(&[("Golf", SkillLevel::Advanced)]);
        let matched = sports_similarity(&viewer, &candidate);
        assert!(matched.score.abs() < TOLERANCE);
        assert!(matched.reason().is_none());
    }

    #[rstest]
    fn later_duplicate_overrides_level() {
        let viewer = entries(&[
            ("Tennis", SkillLevel::Beginner),
            ("TENNIS", SkillLevel::Advanced),
        ]);
        let candidate = entries(&[("tennis", SkillLevel::Advanced)]);
        let matched = sports_similarity(&viewer, &candidate);
        assert!((matched.score - 1.0).abs() < TOLERANCE);
    }

    #[rstest]
    fn unknown_level_counts_as_intermediate() {
        let viewer = entries(&[("Tennis", SkillLevel::Unknown)]);
        let candidate = entries(&[("Tennis", SkillLevel::Intermediate)]);
        let matched = sports_similarity(&viewer, &candidate);
        assert!((matched.score - 1.0).abs() < TOLERANCE);
    }

    #[rstest]
    fn blank_names_are_ignored() {
        let viewer = entries(&[("  ", SkillLevel::Beginner)]);
        let candidate = entries(&[("  ", SkillLevel::Beginner)]);
        assert_eq!(sports_similarity(&viewer, &candidate), SportsMatch::default());
    }

    #[rstest]
    fn coverage_uses_larger_list() {
        // shared = {tennis}, coverage = 1 / 3, alignment = 0.5 (beginner vs advanced)
        let viewer = entries(&[("Tennis", SkillLevel::Beginner)]);
        let candidate = entries(&[
            ("Tennis", SkillLevel::Advanced),
            ("Golf", SkillLevel::Beginner),
            ("Yoga", SkillLevel::Beginner),
        ]);
        let matched = sports_similarity(&viewer, &candidate);
        let expected = 0.7 / 3.0 + 0.3 * 0.5;
        assert!((matched.score - expected).abs() < TOLERANCE);
    }

    #[rstest]
    fn reason_lists_first_three_sorted() {
        let sports = entries(&[
            ("Yoga", SkillLevel::Beginner),
            ("Golf", SkillLevel::Beginner),
            ("Tennis", SkillLevel::Beginner),
            ("Basketball", SkillLevel::Beginner),
        ]);
        let matched = sports_similarity(&sports, &sports);
        assert_eq!(
            matched.reason().as_deref(),
            Some("Shared sports: basketball, golf, tennis")
        );
    }
}
