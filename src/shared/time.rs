//! Epoch value → `DateTime<Utc>` normalization.

use chrono::{DateTime, Utc};

use crate::error::AdapterError;

const MICROS_PER_MILLI: i64 = 1_000;

/// Read an epoch-milliseconds value.
pub fn from_millis(millis: i64) -> Result<DateTime<Utc>, AdapterError> {
    DateTime::<Utc>::from_timestamp_millis(millis).ok_or(AdapterError::TimestampOutOfRange(millis))
}

/// Read an epoch-microseconds value, truncated to millisecond resolution.
pub fn from_micros_truncated(micros: i64) -> Result<DateTime<Utc>, AdapterError> {
    from_millis(micros / MICROS_PER_MILLI)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_millis() {
        let ts = from_millis(1_393_281_234_567).unwrap();
        assert_eq!(ts.timestamp_millis(), 1_393_281_234_567);
        assert_eq!(from_millis(0).unwrap().timestamp(), 0);
    }

    #[test]
    fn test_from_micros_truncates() {
        let ts = from_micros_truncated(1_393_281_234_567_891).unwrap();
        assert_eq!(ts.timestamp_millis(), 1_393_281_234_567);
        assert_eq!(ts.timestamp_subsec_micros(), 567_000);
    }

    #[test]
    fn test_out_of_range() {
        match from_millis(i64::MAX) {
            Err(AdapterError::TimestampOutOfRange(v)) => assert_eq!(v, i64::MAX),
            other => panic!("expected out of range, got {other:?}"),
        }
    }
}
