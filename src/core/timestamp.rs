//! Slack timestamps.
//!
//! Slack addresses messages, reactions and marks by their `ts`, a decimal
//! seconds-since-epoch string with microsecond precision such as
//! `"1503435956.000247"`. Since the string doubles as a message id, the
//! conversion to and from [`DateTime<Utc>`] must not round.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

const MICROS_PER_SECOND: i64 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid Slack timestamp: {0:?}")]
pub struct InvalidTimestamp(pub String);

impl Timestamp {
    #[must_use]
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    #[must_use]
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Whole seconds since the epoch, as `chat.scheduleMessage` expects for `post_at`.
    #[must_use]
    pub fn unix_seconds(&self) -> i64 {
        self.0.timestamp()
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(at: DateTime<Utc>) -> Self {
        Self(at)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Split on the total microsecond count so pre-epoch values keep their sign
        // on the whole number rather than on the fraction.
        let micros = self.0.timestamp_micros();
        let sign = if micros < 0 { "-" } else { "" };
        let abs = micros.unsigned_abs();
        let per_second = MICROS_PER_SECOND.unsigned_abs();
        write!(f, "{sign}{}.{:06}", abs / per_second, abs % per_second)
    }
}

impl FromStr for Timestamp {
    type Err = InvalidTimestamp;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidTimestamp(raw.to_string());
        let trimmed = raw.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if fraction.len() > 9 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let seconds: i64 = whole.parse().map_err(|_| invalid())?;
        let nanos: i64 = if fraction.is_empty() {
            0
        } else {
            let padded = format!("{fraction:0<9}");
            padded.parse().map_err(|_| invalid())?
        };

        let total_nanos = seconds
            .checked_mul(1_000_000_000)
            .and_then(|n| n.checked_add(nanos))
            .ok_or_else(invalid)?;
        let total_nanos = if negative { -total_nanos } else { total_nanos };

        let secs = total_nanos.div_euclid(1_000_000_000);
        let sub = u32::try_from(total_nanos.rem_euclid(1_000_000_000)).map_err(|_| invalid())?;
        DateTime::from_timestamp(secs, sub).map(Self).ok_or_else(invalid)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_formats_with_six_fraction_digits() {
        let at = DateTime::from_timestamp(1_503_435_956, 247_000).unwrap();
        assert_eq!(Timestamp::new(at).to_string(), "1503435956.000247");
    }

    #[test]
    fn test_parses_slack_message_ts() {
        let ts: Timestamp = "1503435956.000247".parse().unwrap();
        assert_eq!(ts.unix_seconds(), 1_503_435_956);
        assert_eq!(ts.as_datetime().timestamp_subsec_micros(), 247);
        assert_eq!(ts.to_string(), "1503435956.000247");
    }

    #[test]
    fn test_parses_whole_seconds() {
        let ts: Timestamp = "1700000000".parse().unwrap();
        assert_eq!(ts.to_string(), "1700000000.000000");
    }

    #[test]
    fn test_pre_epoch_keeps_sign_on_whole_part() {
        let at = Utc.timestamp_opt(-1, 500_000_000).unwrap();
        let ts = Timestamp::new(at);
        assert_eq!(ts.to_string(), "-0.500000");
        assert_eq!("-0.500000".parse::<Timestamp>().unwrap(), ts);
    }

    #[test]
    fn test_rejects_garbage() {
        for raw in ["", ".5", "abc", "12.3x", "1.1234567890", "--1.0"] {
            assert!(raw.parse::<Timestamp>().is_err(), "accepted {raw:?}");
        }
    }

    #[test]
    fn test_serde_uses_wire_string() {
        let ts: Timestamp = "1503435956.000247".parse().unwrap();
        assert_eq!(serde_json::to_string(&ts).unwrap(), "\"1503435956.000247\"");
        let back: Timestamp = serde_json::from_str("\"1503435956.000247\"").unwrap();
        assert_eq!(back, ts);
    }

    #[test]
    fn test_invalid_timestamp_is_an_error_value() {
        let err = "12.ab".parse::<Timestamp>().unwrap_err();
        assert_eq!(err, InvalidTimestamp("12.ab".to_string()));
        assert_eq!(err.to_string(), "invalid Slack timestamp: \"12.ab\"");
        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert!(boxed.source().is_none());
    }
}
