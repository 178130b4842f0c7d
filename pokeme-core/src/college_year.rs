//! The ordered college-year vocabulary.
//!
//! # Examples
//! ```
//! use pokeme_core::CollegeYear;
//!
//! let year: CollegeYear = "Junior".parse().expect("known year");
//! assert_eq!(year, CollegeYear::Junior);
//! assert_eq!(CollegeYear::Freshman.distance(CollegeYear::Graduate), 4);
//! ```

use thiserror::Error;

/// Year of study, ordered from first year to graduate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CollegeYear {
    /// First year undergraduate.
    Freshman,
    /// Second year undergraduate.
    Sophomore,
    /// Third year undergraduate.
    Junior,
    /// Fourth year undergraduate.
    Senior,
    /// Graduate student.
    Graduate,
}

/// Returned when a string is not part of the college-year vocabulary.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown college year '{0}'")]
pub struct UnknownCollegeYear(pub String);

impl CollegeYear {
    /// All years in vocabulary order.
    pub const ALL: [Self; 5] = [
        Self::Freshman,
        Self::Sophomore,
        Self::Junior,
        Self::Senior,
        Self::Graduate,
    ];

    /// Return the year as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Freshman => "freshman",
            Self::Sophomore => "sophomore",
            Self::Junior => "junior",
            Self::Senior => "senior",
            Self::Graduate => "graduate",
        }
    }

    /// Zero-based position in the vocabulary.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Freshman => 0,
            Self::Sophomore => 1,
            Self::Junior => 2,
            Self::Senior => 3,
            Self::Graduate => 4,
        }
    }

    /// Number of vocabulary steps between two years.
    #[must_use]
    pub const fn distance(self, other: Self) -> u8 {
        self.index().abs_diff(other.index())
    }

    /// Parse an optional free-text year, returning `None` when absent or
    /// outside the vocabulary.
    ///
    /// # Examples
    /// ```
    /// use pokeme_core::CollegeYear;
    ///
    /// assert_eq!(CollegeYear::parse_optional(Some(" SENIOR ")), Some(CollegeYear::Senior));
    /// assert_eq!(CollegeYear::parse_optional(Some("postdoc")), None);
    /// assert_eq!(CollegeYear::parse_optional(None), None);
    /// ```
    #[must_use]
    pub fn parse_optional(raw: Option<&str>) -> Option<Self> {
        raw.and_then(|value| value.parse().ok())
    }
}

impl std::fmt::Display for CollegeYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CollegeYear {
    type Err = UnknownCollegeYear;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|year| year.as_str() == normalised)
            .ok_or_else(|| UnknownCollegeYear(s.to_owned()))
    }
}
