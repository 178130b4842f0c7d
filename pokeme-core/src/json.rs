//! JSON decoding for backend user payloads.
//!
//! The discovery endpoint returns camelCase user objects where collections
//! may be missing or `null`. Both decode to empty collections.

use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;

use crate::{Candidate, Profile};

/// Errors raised while decoding user JSON.
#[derive(Debug, Error)]
pub enum ProfileJsonError {
    /// The payload was not valid JSON for the expected shape.
    #[error("failed to decode {what} from JSON")]
    Decode {
        /// Description of the expected value.
        what: &'static str,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}

/// Decode a single user object into a [`Profile`].
///
/// Identity fields in the payload are ignored.
///
/// # Errors
/// Returns [`ProfileJsonError::Decode`] when the payload is not a JSON object
/// of the expected shape.
///
/// # Examples
/// ```
/// use pokeme_core::{SkillLevel, profile_from_json};
///
/// let profile = profile_from_json(
///     r#"{"sports":[{"sport":"Tennis","skillLevel":"Advanced"}],"availability":null}"#,
/// )
/// .expect("valid profile");
/// assert_eq!(profile.sports[0].skill_level, SkillLevel::Advanced);
/// assert!(profile.availability.is_empty());
/// ```
pub fn profile_from_json(payload: &str) -> Result<Profile, ProfileJsonError> {
    let decode_error = |source| ProfileJsonError::Decode {
        what: "profile",
        source,
    };
    let value: Value = serde_json::from_str(payload).map_err(decode_error)?;
    if !value.is_object() {
        return Err(decode_error(serde_json::Error::invalid_type(
            unexpected(&value),
            &"a user object",
        )));
    }
    serde_json::from_value(value).map_err(decode_error)
}

/// Describe a non-object JSON value for an `invalid_type` error.
fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(flag) => Unexpected::Bool(*flag),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(text) => Unexpected::Str(text),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

/// Decode a JSON array of user objects into [`Candidate`]s.
///
/// # Errors
/// Returns [`ProfileJsonError::Decode`] when the payload is not an array of
/// user objects or an entry lacks an `id`.
pub fn candidates_from_json(payload: &str) -> Result<Vec<Candidate>, ProfileJsonError> {
    serde_json::from_str(payload).map_err(|source| ProfileJsonError::Decode {
        what: "candidate list",
        source,
    })
}

/// Deserialize a value, treating an explicit `null` as the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
