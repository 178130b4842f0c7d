//! Score a candidate against the viewing user.
//!
//! The `CompatibilityScorer` trait produces a [`ScoreResult`](crate::ScoreResult)
//! for a viewer and a candidate [`Profile`](crate::Profile).

use crate::{Profile, ScoreResult};

/// Calculate how well a candidate suits the viewer as a sports partner.
///
/// Scoring is evaluated from the viewer's perspective. Implementations must be
/// thread-safe (`Send` + `Sync`) so a feed can be scored in parallel, and must
/// be total: sparse or malformed profile fields reduce the affected factor to
/// zero instead of failing.
///
/// Implementations must:
/// - Return a `score` within `0..=100`.
/// - Report every factor in the breakdown.
/// - Return at least one reason.
///
/// [`ScoreResult::new`] enforces the last two guards.
///
/// # Examples
///
/// ```rust
/// use pokeme_core::{Breakdown, CompatibilityScorer, Profile, ScoreResult};
///
/// struct FlatScorer;
///
/// impl CompatibilityScorer for FlatScorer {
///     fn score(&self, _viewer: &Profile, _candidate: &Profile) -> ScoreResult {
///         ScoreResult::new(50, Vec::new(), Breakdown::default())
///     }
/// }
///
/// let result = FlatScorer.score(&Profile::new(), &Profile::new());
/// assert_eq!(result.score(), 50);
/// assert_eq!(result.reasons().len(), 1);
/// ```
pub trait CompatibilityScorer: Send + Sync {
    /// Return a score for `candidate` as seen by `viewer`.
    fn score(&self, viewer: &Profile, candidate: &Profile) -> ScoreResult;
}

impl<S: CompatibilityScorer + ?Sized> CompatibilityScorer for &S {
    fn score(&self, viewer: &Profile, candidate: &Profile) -> ScoreResult {
        (**self).score(viewer, candidate)
    }
}
