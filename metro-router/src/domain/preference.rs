//! Route cost preferences.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned for an unknown preference code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown preference code: {code}")]
pub struct InvalidPreference {
    code: u8,
}

/// What the route search minimizes.
///
/// Front ends address preferences by integer code 0-4; use the `TryFrom`
/// conversion at that boundary.
///
/// # Examples
///
/// ```
/// use metro_router::domain::Preference;
///
/// assert_eq!(Preference::try_from(1).unwrap(), Preference::Time);
/// assert_eq!(Preference::Transfers.code(), 3);
/// assert!(Preference::try_from(9).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preference {
    /// Raw adjacency costs with no heuristic guidance; the search
    /// degenerates to pure cost-so-far ordering.
    Adjacency,
    /// Minimum total travel time.
    Time,
    /// Minimum distance travelled.
    Distance,
    /// Minimum line transfers.
    Transfers,
    /// Minimum distinct stops.
    Stops,
}

impl Preference {
    /// The integer code used by front ends.
    pub fn code(self) -> u8 {
        match self {
            Preference::Adjacency => 0,
            Preference::Time => 1,
            Preference::Distance => 2,
            Preference::Transfers => 3,
            Preference::Stops => 4,
        }
    }
}

impl TryFrom<u8> for Preference {
    type Error = InvalidPreference;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Preference::Adjacency),
            1 => Ok(Preference::Time),
            2 => Ok(Preference::Distance),
            3 => Ok(Preference::Transfers),
            4 => Ok(Preference::Stops),
            code => Err(InvalidPreference { code }),
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Preference::Adjacency => "adjacency",
            Preference::Time => "time",
            Preference::Distance => "distance",
            Preference::Transfers => "transfers",
            Preference::Stops => "stops",
        };
        f.write_str(name)
    }
}
