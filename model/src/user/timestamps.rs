use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::util;

/// Start and end of an activity as unix epochs in milliseconds.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timestamps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
}

impl Timestamps {
    pub fn new(start: Option<i64>, end: Option<i64>) -> Timestamps {
        Timestamps { start, end }
    }

    pub fn from_times(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Timestamps {
        Timestamps {
            start: start.map(|time| time.timestamp_millis()),
            end: end.map(|time| time.timestamp_millis()),
        }
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start.and_then(util::millis_to_datetime)
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end.and_then(util::millis_to_datetime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_accessors_follow_raw_fields() {
        let timestamps = Timestamps::new(Some(1_507_665_886_000), None);

        let start = Utc.with_ymd_and_hms(2017, 10, 10, 20, 4, 46).unwrap();
        assert_eq!(timestamps.start_time(), Some(start));
        assert_eq!(timestamps.end_time(), None);
    }

    #[test]
    fn test_from_times() {
        let end = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let timestamps = Timestamps::from_times(None, Some(end));

        assert_eq!(timestamps.end, Some(1_577_836_800_000));
        assert_eq!(serde_json::to_value(timestamps).unwrap(), json!({"end": 1_577_836_800_000i64}));
    }

    #[test]
    fn test_before_epoch() {
        let start = Utc.with_ymd_and_hms(1969, 7, 20, 20, 17, 40).unwrap();
        let timestamps = Timestamps::from_times(Some(start), None);
        assert_eq!(timestamps.start, Some(-14_182_940_000));

        let value = serde_json::to_value(timestamps).unwrap();
        assert_eq!(value, json!({"start": -14_182_940_000i64}));

        let decoded: Timestamps = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, timestamps);
        assert_eq!(decoded.start_time(), Some(start));
    }
}
