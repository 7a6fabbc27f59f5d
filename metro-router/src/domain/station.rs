//! Station identity type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when constructing an invalid station id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// A station identity: a positive integer, unique within a network.
///
/// Identities are assigned by the network data source. Several stations may
/// share a *name* (one per line serving the same physical stop), but never
/// an id.
///
/// # Examples
///
/// ```
/// use metro_router::domain::StationId;
///
/// let id = StationId::new(7).unwrap();
/// assert_eq!(id.get(), 7);
///
/// // Zero is not a valid identity
/// assert!(StationId::new(0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct StationId(u32);

impl StationId {
    /// Construct a station id from its raw integer form.
    ///
    /// The input must be strictly positive.
    pub fn new(raw: u32) -> Result<Self, InvalidStationId> {
        if raw == 0 {
            return Err(InvalidStationId {
                reason: "must be a positive integer",
            });
        }
        Ok(StationId(raw))
    }

    /// Returns the raw integer form.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for StationId {
    type Error = InvalidStationId;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        StationId::new(raw)
    }
}

impl From<StationId> for u32 {
    fn from(id: StationId) -> u32 {
        id.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
