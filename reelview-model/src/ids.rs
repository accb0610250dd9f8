use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Numeric catalog identifier, unique within one result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ContentId(pub i64);

impl ContentId {
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> i64 {
        self.0
    }

    /// Compare against an id segment exactly as it arrived from a route.
    ///
    /// The comparison is textual against the decimal rendering, so `"007"`
    /// does not match `7`.
    pub fn matches_segment(self, segment: &str) -> bool {
        self.0.to_string() == segment
    }
}

impl From<i64> for ContentId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl FromStr for ContentId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(ContentId)
            .map_err(|_| ModelError::InvalidContentId(s.to_string()))
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
