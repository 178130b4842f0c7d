//! Player profiles as seen by the discovery feed.
//!
//! A [`Profile`] carries only the fields that matter for compatibility
//! scoring. Identity and display data live on [`Candidate`], so derived
//! ranking output never has to be written back into the profile itself.

use std::collections::BTreeMap;

use crate::SkillLevel;

/// Weekly availability: free-text day names mapped to free-text slot labels.
pub type Availability = BTreeMap<String, Vec<String>>;

/// A sport the player lists, with their self-reported level.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct SportEntry {
    /// Sport name as entered, e.g. `"Table Tennis"`.
    pub sport: String,
    /// Self-reported level for the sport.
    #[cfg_attr(feature = "serde", serde(default))]
    pub skill_level: SkillLevel,
}

impl SportEntry {
    /// Construct an entry from a name and level.
    ///
    /// # Examples
    /// ```
    /// use pokeme_core::{SkillLevel, SportEntry};
    ///
    /// let entry = SportEntry::new("Tennis", SkillLevel::Advanced);
    /// assert_eq!(entry.sport, "Tennis");
    /// ```
    #[must_use]
    pub fn new(sport: impl Into<String>, skill_level: SkillLevel) -> Self {
        Self {
            sport: sport.into(),
            skill_level,
        }
    }
}

/// Scoring-relevant view of a user.
///
/// Every field may be empty. Sparse profiles are valid input and simply
/// contribute no signal for the affected factor.
///
/// # Examples
/// ```
/// use pokeme_core::{Profile, SkillLevel};
///
/// let profile = Profile::new()
///     .with_sport("Tennis", SkillLevel::Intermediate)
///     .with_availability("Monday", ["Morning"])
///     .with_college_year("junior")
///     .with_major("Economics");
/// assert_eq!(profile.sports.len(), 1);
/// assert_eq!(profile.major.as_deref(), Some("Economics"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct Profile {
    /// Sports in the order the user listed them.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::json::null_as_default")
    )]
    pub sports: Vec<SportEntry>,
    /// Weekly availability windows.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::json::null_as_default")
    )]
    pub availability: Availability,
    /// Free-text college year; see [`CollegeYear`](crate::CollegeYear).
    #[cfg_attr(feature = "serde", serde(default))]
    pub college_year: Option<String>,
    /// Free-text major.
    #[cfg_attr(feature = "serde", serde(default))]
    pub major: Option<String>,
    /// Free-text bio.
    #[cfg_attr(feature = "serde", serde(default))]
    pub bio: Option<String>,
}

impl Profile {
    /// Construct an empty profile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sport while returning `self` for chaining.
    #[must_use]
    pub fn with_sport(mut self, sport: impl Into<String>, level: SkillLevel) -> Self {
        self.sports.push(SportEntry::new(sport, level));
        self
    }

    /// Add slots for a day while returning `self` for chaining.
    ///
    /// Slots are appended to any already recorded for the same day key.
    #[must_use]
    pub fn with_availability<I, S>(mut self, day: impl Into<String>, slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.availability
            .entry(day.into())
            .or_default()
            .extend(slots.into_iter().map(Into::into));
        self
    }

    /// Set the college year while returning `self` for chaining.
    #[must_use]
    pub fn with_college_year(mut self, year: impl Into<String>) -> Self {
        self.college_year = Some(year.into());
        self
    }

    /// Set the major while returning `self` for chaining.
    #[must_use]
    pub fn with_major(mut self, major: impl Into<String>) -> Self {
        self.major = Some(major.into());
        self
    }

    /// Set the bio while returning `self` for chaining.
    #[must_use]
    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    /// Report whether the profile lists `sport`, ignoring case and
    /// surrounding whitespace.
    ///
    /// # Examples
    /// ```
    /// use pokeme_core::{Profile, SkillLevel};
    ///
    /// let profile = Profile::new().with_sport("Soccer", SkillLevel::Beginner);
    /// assert!(profile.plays(" soccer"));
    /// assert!(!profile.plays("tennis"));
    /// ```
    #[must_use]
    pub fn plays(&self, sport: &str) -> bool {
        let wanted = sport.trim().to_lowercase();
        self.sports
            .iter()
            .any(|entry| entry.sport.trim().to_lowercase() == wanted)
    }
}

/// A discoverable user: identity plus scoring profile.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct Candidate {
    /// Stable backend identifier.
    pub id: String,
    /// Name shown in the feed.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::json::null_as_default")
    )]
    pub display_name: String,
    /// Scoring-relevant fields.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub profile: Profile,
}

impl Candidate {
    /// Construct a candidate from its parts.
    #[must_use]
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, profile: Profile) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            profile,
        }
    }
}
