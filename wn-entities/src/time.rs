use std::{fmt, ops::Add};

use time::{Duration, OffsetDateTime};

/// UTC timestamp with millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn now() -> Self {
        OffsetDateTime::now_utc().into()
    }

    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }

    pub const fn as_secs(self) -> i64 {
        self.0.div_euclid(1000)
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self((from.unix_timestamp_nanos() / 1_000_000) as i64)
    }
}

impl Add<Duration> for Timestamp {
    type Output = Self;
    fn add(self, duration: Duration) -> Self {
        Self(self.0 + duration.whole_milliseconds() as i64)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match OffsetDateTime::from_unix_timestamp_nanos(i128::from(self.0) * 1_000_000) {
            Ok(date_time) => write!(f, "{date_time}"),
            Err(_) => write!(f, "{} ms", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_round_trip() {
        let now = Timestamp::now();
        assert_eq!(now, Timestamp::from_millis(now.as_millis()));
    }

    #[test]
    fn add_duration() {
        let t = Timestamp::from_millis(1_000);
        assert_eq!(Timestamp::from_millis(61_000), t + Duration::minutes(1));
    }

    #[test]
    fn seconds_from_millis() {
        assert_eq!(1, Timestamp::from_millis(1_999).as_secs());
        assert_eq!(-2, Timestamp::from_millis(-1_001).as_secs());
    }
}
