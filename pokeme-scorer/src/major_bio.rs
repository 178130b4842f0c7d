//! Major and bio similarity: an exact major match plus shared vocabulary.

use std::collections::HashSet;

use pokeme_core::Profile;

use crate::similarity::jaccard;

const MAJOR_SHARE: f64 = 0.6;
const TEXT_SHARE: f64 = 0.4;

/// Words too common to signal shared interests.
const STOPWORDS: [&str; 26] = [
    "a", "an", "and", "are", "as", "at", "be", "for", "from", "i", "in", "is", "it", "my", "of",
    "on", "or", "our", "that", "the", "their", "to", "we", "with", "you", "your",
];

/// Outcome of comparing majors and bios.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MajorBioMatch {
    /// Similarity in `0.0..=1.0`.
    pub score: f64,
    /// Whether both players list the same non-empty major.
    pub same_major: bool,
}

impl MajorBioMatch {
    /// Reason line emitted for an exact major match.
    #[must_use]
    pub const fn reason(&self) -> Option<&'static str> {
        if self.same_major {
            Some("Same major")
        } else {
            None
        }
    }
}

/// Compare majors and bios.
///
/// An exact (trimmed, case-insensitive) major match contributes `0.6`; the
/// Jaccard index of the `major + bio` token sets contributes up to `0.4`.
/// When the majors match, their words are already credited by the first
/// component and are left out of the vocabulary comparison. Comparing the
/// raw `major + bio` text instead would count a shared major twice and score
/// two same-major players with empty bios at `1.0` rather than `0.6`.
///
/// # Examples
/// ```
/// use pokeme_core::Profile;
/// use pokeme_scorer::major_bio_similarity;
///
/// let viewer = Profile::new().with_major("Economics");
/// let candidate = Profile::new().with_major(" economics ");
/// let matched = major_bio_similarity(&viewer, &candidate);
/// assert!(matched.same_major);
/// assert!((matched.score - 0.6).abs() < 1e-9);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the factor blends two weighted components"
)]
pub fn major_bio_similarity(viewer: &Profile, candidate: &Profile) -> MajorBioMatch {
    let majors_match = same_major(viewer.major.as_deref(), candidate.major.as_deref());
    let mut ours = profile_tokens(viewer);
    let mut theirs = profile_tokens(candidate);
    if majors_match {
        let major_words = tokenize(viewer.major.as_deref().unwrap_or_default());
        ours.retain(|token| !major_words.contains(token));
        theirs.retain(|token| !major_words.contains(token));
    }
    let text = jaccard(&ours, &theirs);
    let major_component = if majors_match { 1.0 } else { 0.0 };
    MajorBioMatch {
        score: (MAJOR_SHARE * major_component + TEXT_SHARE * text).min(1.0),
        same_major: majors_match,
    }
}

fn same_major(ours: Option<&str>, theirs: Option<&str>) -> bool {
    let ours_key = normalise(ours);
    !ours_key.is_empty() && ours_key == normalise(theirs)
}

fn normalise(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_lowercase()
}

fn profile_tokens(profile: &Profile) -> HashSet<String> {
    let major = profile.major.as_deref().unwrap_or_default();
    let bio = profile.bio.as_deref().unwrap_or_default();
    tokenize(&format!("{major} {bio}"))
}

/// Split text into lowercase alphanumeric words, dropping single characters
/// and stopwords.
///
/// # Examples
/// ```
/// use pokeme_scorer::tokenize;
///
/// let tokens = tokenize("I play 3v3 basketball, and pickup-soccer!");
/// assert!(tokens.contains("3v3"));
/// assert!(tokens.contains("pickup"));
/// assert!(!tokens.contains("and"));
/// assert!(!tokens.contains("i"));
/// ```
#[must_use]
pub fn tokenize(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() > 1 && !STOPWORDS.contains(token))
        .map(str::to_owned)
        .collect()
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
    #[case("", &[])]
    #[case("The and of", &[])]
    #[case("a b c xy", &["xy"])]
    #[case("Basketball BASKETBALL basketball", &["basketball"])]
    #[case("don't stop", &["don", "stop"])]
    fn tokenize_scenarios(#[case] text: &str, #[case] expected: &[&str]) {
        let expected_set: HashSet<String> = expected.iter().map(|&t| t.to_owned()).collect();
        assert_eq!(tokenize(text), expected_set);
    }

    #[rstest]
    #[case("", "")]
    #[case("soccer on weekends", "tennis at night")]
    fn same_major_without_bio_overlap_scores_sixty_percent(
        #[case] our_bio: &str,
        #[case] their_bio: &str,
    ) {
        let viewer = Profile::new().with_major("Economics").with_bio(our_bio);
        let candidate = Profile::new().with_major("economics").with_bio(their_bio);
        let matched = major_bio_similarity(&viewer, &candidate);
        assert!(matched.same_major);
        assert_eq!(matched.reason(), Some("Same major"));
        assert!((matched.score - 0.6).abs() < TOLERANCE);
    }

    #[rstest]
    fn same_major_and_shared_bio_scores_full() {
        let viewer = Profile::new()
            .with_major("Computer Science")
            .with_bio("basketball");
        let candidate = Profile::new()
            .with_major("Computer Science")
            .with_bio("Basketball!");
        let matched = major_bio_similarity(&viewer, &candidate);
        assert!((matched.score - 1.0).abs() < TOLERANCE);
    }

    #[rstest]
    fn different_majors_still_share_words() {
        // tokens: {computer, science} vs {computer, engineering}
        let viewer = Profile::new().with_major("Computer Science");
        let candidate = Profile::new().with_major("Computer Engineering");
        let matched = major_bio_similarity(&viewer, &candidate);
        assert!(!matched.same_major);
        assert!((matched.score - 0.4 / 3.0).abs() < TOLERANCE);
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some(""), Some(""))]
    #[case(Some("  "), Some("  "))]
    #[case(Some("Biology"), None)]
    fn blank_majors_never_match(#[case] ours: Option<&str>, #[case] theirs: Option<&str>) {
        assert!(!same_major(ours, theirs));
    }

    #[rstest]
    fn bios_contribute_shared_vocabulary() {
        let viewer = Profile::new().with_bio("pickup basketball evenings");
        let candidate = Profile::new().with_bio("basketball evenings downtown");
        let matched = major_bio_similarity(&viewer, &candidate);
        // tokens: {pickup, basketball, evenings} vs {basketball, evenings, downtown}
        assert!(!matched.same_major);
        assert!((matched.score - 0.4 * 0.5).abs() < TOLERANCE);
    }

    #[rstest]
    fn empty_text_has_no_signal() {
        let matched = major_bio_similarity(&Profile::new(), &Profile::new());
        assert_eq!(matched, MajorBioMatch::default());
        assert_eq!(matched.reason(), None);
    }
}
