//! Customer tier (1-3), rendered as a star rating.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a value is outside the tier range.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("tier must be between {min} and {max} (got {0})", min = Tier::MIN, max = Tier::MAX)]
pub struct TierError(pub u8);

/// A customer tier in `1..=3`.
///
/// ```
/// use lendsqr_core::Tier;
///
/// let tier = Tier::try_from(2).unwrap();
/// assert_eq!(tier.get(), 2);
/// assert_eq!(tier.stars(), [true, true, false]);
/// assert!(Tier::try_from(0).is_err());
/// assert!(Tier::try_from(4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Tier(u8);

impl Tier {
    /// Lowest tier.
    pub const MIN: u8 = 1;
    /// Highest tier.
    pub const MAX: u8 = 3;

    /// Returns the numeric tier.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns one flag per star slot; filled slots come first.
    #[must_use]
    pub const fn stars(self) -> [bool; 3] {
        [self.0 >= 1, self.0 >= 2, self.0 >= 3]
    }
}

impl TryFrom<u8> for Tier {
    type Error = TierError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TierError(value))
        }
    }
}

impl From<Tier> for u8 {
    fn from(tier: Tier) -> Self {
        tier.0
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
