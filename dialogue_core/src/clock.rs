//! Caller-supplied time.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};
use std::time::Duration;

/// An instant measured from an arbitrary epoch of the caller's choosing.
///
/// The core never reads a clock itself; every time-dependent operation takes
/// the current instant as an argument. Overlay expiry therefore reduces to a
/// plain comparison, and tests pick whatever instants they need.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Timestamp(Duration);

impl Timestamp {
    /// The epoch itself.
    pub const ZERO: Timestamp = Timestamp(Duration::ZERO);

    /// An instant a number of seconds after the epoch.
    pub fn from_secs(secs: u64) -> Self {
        Self(Duration::from_secs(secs))
    }

    /// An instant a number of milliseconds after the epoch.
    pub fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    /// Time elapsed since the epoch.
    pub fn as_duration(&self) -> Duration {
        self.0
    }
}

impl Add<Duration> for Timestamp {
    type Output = Timestamp;

    fn add(self, rhs: Duration) -> Timestamp {
        Timestamp(self.0 + rhs)
    }
}

impl Sub<Duration> for Timestamp {
    type Output = Timestamp;

    fn sub(self, rhs: Duration) -> Timestamp {
        Timestamp(self.0 - rhs)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_ordering() {
        let earlier = Timestamp::from_secs(1);
        let later = Timestamp::from_secs(2);

        assert!(earlier < later);
        assert_eq!(Timestamp::ZERO, Timestamp::from_secs(0));
    }

    #[test]
    fn test_timestamp_offset() {
        let start = Timestamp::from_secs(10);
        assert_eq!(start + Duration::from_secs(3), Timestamp::from_secs(13));
        assert_eq!(start + Duration::from_millis(500), Timestamp::from_millis(10_500));
    }
}
