//! Self-reported skill levels for a sport.
//!
//! Parsing is lenient: anything that is not a recognised level becomes
//! [`SkillLevel::Unknown`] rather than an error, so sparse or legacy profiles
//! can still be scored.
//!
//! # Examples
//! ```
//! use pokeme_core::SkillLevel;
//!
//! assert_eq!(SkillLevel::from(" Advanced "), SkillLevel::Advanced);
//! assert_eq!(SkillLevel::from("pro"), SkillLevel::Unknown);
//! assert_eq!(SkillLevel::Beginner.to_string(), "Beginner");
//! ```

/// A player's self-reported level in one sport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(from = "Option<String>", into = "&'static str")
)]
pub enum SkillLevel {
    /// New to the sport.
    Beginner,
    /// Plays regularly.
    Intermediate,
    /// Competitive or very experienced.
    Advanced,
    /// Missing or unrecognised level.
    #[default]
    Unknown,
}

impl SkillLevel {
    /// Return the display label used by the mobile client.
    ///
    /// # Examples
    /// ```
    /// use pokeme_core::SkillLevel;
    ///
    /// assert_eq!(SkillLevel::Intermediate.as_str(), "Intermediate");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Unknown => "Unknown",
        }
    }

    /// Ordinal used when comparing two players' levels.
    ///
    /// Unknown levels are treated as intermediate.
    ///
    /// # Examples
    /// ```
    /// use pokeme_core::SkillLevel;
    ///
    /// assert_eq!(SkillLevel::Beginner.rank(), 1);
    /// assert_eq!(SkillLevel::Unknown.rank(), SkillLevel::Intermediate.rank());
    /// ```
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Beginner => 1,
            Self::Intermediate | Self::Unknown => 2,
            Self::Advanced => 3,
        }
    }
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for SkillLevel {
    fn from(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "beginner" => Self::Beginner,
            "intermediate" => Self::Intermediate,
            "advanced" => Self::Advanced,
            _ => Self::Unknown,
        }
    }
}

impl From<String> for SkillLevel {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<Option<String>> for SkillLevel {
    fn from(raw: Option<String>) -> Self {
        raw.map_or(Self::Unknown, Self::from)
    }
}

impl From<SkillLevel> for &'static str {
    fn from(level: SkillLevel) -> Self {
        level.as_str()
    }
}
