//! Line identity type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when constructing an invalid line id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line id: {reason}")]
pub struct InvalidLineId {
    reason: &'static str,
}

/// A metro line identity: a positive integer.
///
/// Line ids double as the 1-based index into the per-line velocity table of
/// [`CityInfo`](crate::network::CityInfo).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct LineId(u32);

impl LineId {
    /// Construct a line id from its raw integer form.
    ///
    /// The input must be strictly positive.
    pub fn new(raw: u32) -> Result<Self, InvalidLineId> {
        if raw == 0 {
            return Err(InvalidLineId {
                reason: "must be a positive integer",
            });
        }
        Ok(LineId(raw))
    }

    /// Returns the raw integer form.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for LineId {
    type Error = InvalidLineId;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        LineId::new(raw)
    }
}

impl From<LineId> for u32 {
    fn from(id: LineId) -> u32 {
        id.0
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
