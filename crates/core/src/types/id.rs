//! Back-office user identifiers.
//!
//! User IDs have the fixed shape `LSQ` followed by an 8-digit, zero-padded
//! sequence number (e.g. `LSQ00000042`). Wrapping them in [`UserId`] keeps
//! malformed identifiers out of the repository and the routes.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`UserId`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum UserIdError {
    /// The input does not start with the `LSQ` prefix.
    #[error("user id must start with \"{}\"", UserId::PREFIX)]
    MissingPrefix,
    /// The part after the prefix is not exactly 8 ASCII digits.
    #[error("user id must end with {} digits", UserId::DIGITS)]
    InvalidSequence,
    /// The sequence number does not fit into 8 digits.
    #[error("sequence {0} does not fit into {digits} digits", digits = UserId::DIGITS)]
    SequenceOverflow(u32),
}

/// A back-office user ID (`LSQ########`).
///
/// ```
/// use lendsqr_core::UserId;
///
/// let id = UserId::from_sequence(42).unwrap();
/// assert_eq!(id.as_str(), "LSQ00000042");
/// assert_eq!(id.sequence(), 42);
///
/// assert!(UserId::parse("LSQ00000042").is_ok());
/// assert!(UserId::parse("LSQ42").is_err());
/// assert!(UserId::parse("ABC00000042").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Prefix shared by every user ID.
    pub const PREFIX: &'static str = "LSQ";

    /// Number of digits in the sequence part.
    pub const DIGITS: usize = 8;

    const MAX_SEQUENCE: u32 = 99_999_999;

    /// Build the ID for a sequence number.
    ///
    /// # Errors
    ///
    /// Returns [`UserIdError::SequenceOverflow`] if `sequence` needs more than 8 digits.
    pub fn from_sequence(sequence: u32) -> Result<Self, UserIdError> {
        if sequence > Self::MAX_SEQUENCE {
            return Err(UserIdError::SequenceOverflow(sequence));
        }
        Ok(Self(format!(
            "{}{sequence:0width$}",
            Self::PREFIX,
            width = Self::DIGITS
        )))
    }

    /// Parse a `UserId` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the prefix is missing or the sequence part is not
    /// exactly 8 ASCII digits.
    pub fn parse(s: &str) -> Result<Self, UserIdError> {
        let digits = s
            .strip_prefix(Self::PREFIX)
            .ok_or(UserIdError::MissingPrefix)?;

        if digits.len() != Self::DIGITS || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(UserIdError::InvalidSequence);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the numeric sequence part.
    #[must_use]
    pub fn sequence(&self) -> u32 {
        self.0
            .get(Self::PREFIX.len()..)
            .and_then(|digits| digits.parse().ok())
            .unwrap_or_default()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for UserId {
    type Err = UserIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for UserId {
    type Error = UserIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_sequence_pads_to_eight_digits() {
        assert_eq!(UserId::from_sequence(1).unwrap().as_str(), "LSQ00000001");
        assert_eq!(
            UserId::from_sequence(99_999_999).unwrap().as_str(),
            "LSQ99999999"
        );
    }

    #[test]
    fn test_from_sequence_overflow() {
        assert_eq!(
            UserId::from_sequence(100_000_000),
            Err(UserIdError::SequenceOverflow(100_000_000))
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(UserId::parse(""), Err(UserIdError::MissingPrefix));
        assert_eq!(UserId::parse("lsq00000001"), Err(UserIdError::MissingPrefix));
        assert_eq!(UserId::parse("LSQ0000001"), Err(UserIdError::InvalidSequence));
        assert_eq!(UserId::parse("LSQ000000012"), Err(UserIdError::InvalidSequence));
        assert_eq!(UserId::parse("LSQ0000000a"), Err(UserIdError::InvalidSequence));
    }

    #[test]
    fn test_sequence_round_trips() {
        let id = UserId::parse("LSQ00001234").unwrap();
        assert_eq!(id.sequence(), 1234);
    }

    #[test]
    fn test_serde_validates() {
        let id: UserId = serde_json::from_str("\"LSQ00000007\"").unwrap();
        assert_eq!(id.sequence(), 7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"LSQ00000007\"");

        assert!(serde_json::from_str::<UserId>("\"7\"").is_err());
    }
}
