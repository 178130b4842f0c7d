//! Availability similarity: overlap of weekly `day:slot` windows.

use std::collections::HashSet;

use pokeme_core::Availability;

use crate::similarity::jaccard;

/// Outcome of comparing two weekly schedules.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AvailabilityMatch {
    /// Jaccard index of the two window sets, in `0.0..=1.0`.
    pub score: f64,
    /// Number of windows both players list.
    pub overlap: usize,
}

impl AvailabilityMatch {
    /// Reason line emitted when any window overlaps.
    #[must_use]
    pub const fn reason(&self) -> Option<&'static str> {
        if self.overlap > 0 {
            Some("Overlapping availability windows")
        } else {
            None
        }
    }
}

/// Compare two weekly schedules as sets of lowercased `day:slot` tokens.
///
/// # Examples
/// ```
/// use pokeme_core::Profile;
/// use pokeme_scorer::availability_similarity;
///
/// let viewer = Profile::new().with_availability("Monday", ["Morning"]);
/// let candidate = Profile::new()
///     .with_availability("monday", ["MORNING"])
///     .with_availability("Tuesday", ["Evening"]);
/// let matched = availability_similarity(&viewer.availability, &candidate.availability);
/// assert_eq!(matched.overlap, 1);
/// assert!((matched.score - 0.5).abs() < 1e-9);
/// ```
#[must_use]
pub fn availability_similarity(viewer: &Availability, candidate: &Availability) -> AvailabilityMatch {
    let ours = windows(viewer);
    let theirs = windows(candidate);
    if ours.is_empty() || theirs.is_empty() {
        return AvailabilityMatch::default();
    }
    AvailabilityMatch {
        score: jaccard(&ours, &theirs),
        overlap: ours.intersection(&theirs).count(),
    }
}

/// Collect `day:slot` tokens, skipping blank day or slot labels.
fn windows(availability: &Availability) -> HashSet<String> {
    availability
        .iter()
        .filter_map(|(day, slots)| {
            let day_key = day.trim().to_lowercase();
            (!day_key.is_empty()).then_some((day_key, slots))
        })
        .flat_map(|(day_key, slots)| {
            slots.iter().filter_map(move |slot| {
                let slot_key = slot.trim().to_lowercase();
                (!slot_key.is_empty()).then(|| format!("{day_key}:{slot_key}"))
            })
        })
        .collect()
}

#[cfg(test)]
#[expect(
    clippy::float_arithmetic,
    reason = "tests compare floating point values"
)]
mod tests {
    use super::*;
    use pokeme_core::Profile;
    use rstest::rstest;

    const TOLERANCE: f64 = 1e-9;

    #[rstest]
    fn identical_schedules_score_full() {
        let profile = Profile::new()
            .with_availability("Saturday", ["Morning", "Afternoon"])
            .with_availability("Sunday", ["Evening"]);
        let matched = availability_similarity(&profile.availability, &profile.availability);
        assert!((matched.score - 1.0).abs() < TOLERANCE);
        assert_eq!(matched.overlap, 3);
        assert!(matched.reason().is_some());
    }

    #[rstest]
    fn disjoint_schedules_score_zero() {
        let viewer = Profile::new().with_availability("Monday", ["Morning"]);
        let candidate = Profile::new().with_availability("Monday", ["Evening"]);
        let matched = availability_similarity(&viewer.availability, &candidate.availability);
        assert!(matched.score.abs() < TOLERANCE);
        assert_eq!(matched.reason(), None);
    }

    #[rstest]
    fn empty_schedule_has_no_signal() {
        let viewer = Profile::new().with_availability("Monday", ["Morning"]);
        let empty = Profile::new().with_availability("Monday", Vec::<String>::new());
        let matched = availability_similarity(&viewer.availability, &empty.availability);
        assert_eq!(matched, AvailabilityMatch::default());
    }

    #[rstest]
    fn blank_labels_are_skipped() {
        let profile = Profile::new()
            .with_availability("  ", ["Morning"])
            .with_availability("Friday", ["", "Night"]);
        let tokens = windows(&profile.availability);
        assert_eq!(tokens, HashSet::from(["friday:night".to_owned()]));
    }

    #[rstest]
    fn tokens_ignore_case_and_padding() {
        let viewer = Profile::new().with_availability(" Monday", ["Morning "]);
        let candidate = Profile::new().with_availability("MONDAY", ["morning"]);
        let matched = availability_similarity(&viewer.availability, &candidate.availability);
        assert!((matched.score - 1.0).abs() < TOLERANCE);
    }
}
