//! Time tags for sampled values.
//!
//! A sample time is written either as an ISO-8601 string or as a number of
//! seconds relative to the property's `epoch`. The two forms are kept apart:
//! comparing them requires resolving both to an instant first.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::JsonCodec;
use crate::util::json::{f64_value, kind_name};
use crate::util::{Error, Result};

/// Time of a sample.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeTag {
    /// ISO-8601 date-time string, kept verbatim.
    Iso8601(String),
    /// Seconds since the property's epoch.
    SecondsSinceEpoch(f64),
}

impl TimeTag {
    /// Create an ISO-8601 time tag.
    pub fn iso(s: impl Into<String>) -> Self {
        Self::Iso8601(s.into())
    }

    /// Create a seconds-since-epoch time tag.
    pub const fn seconds(s: f64) -> Self {
        Self::SecondsSinceEpoch(s)
    }

    #[inline]
    pub fn is_iso8601(&self) -> bool {
        matches!(self, Self::Iso8601(_))
    }

    #[inline]
    pub fn as_iso8601(&self) -> Option<&str> {
        match self {
            Self::Iso8601(s) => Some(s),
            Self::SecondsSinceEpoch(_) => None,
        }
    }

    #[inline]
    pub fn as_seconds(&self) -> Option<f64> {
        match self {
            Self::Iso8601(_) => None,
            Self::SecondsSinceEpoch(s) => Some(*s),
        }
    }
}

impl JsonCodec for TimeTag {
    /// String is tried before number.
    fn decode(json: &Value) -> Result<Self> {
        if let Some(s) = json.as_str() {
            return Ok(Self::Iso8601(s.to_owned()));
        }
        if let Some(secs) = json.as_f64() {
            return Ok(Self::SecondsSinceEpoch(secs));
        }
        Err(Error::unexpected(
            format!("time tag (string or number), found {}", kind_name(json)),
            "time",
        ))
    }

    fn encode(&self) -> Value {
        match self {
            Self::Iso8601(s) => Value::String(s.clone()),
            Self::SecondsSinceEpoch(secs) => f64_value(*secs),
        }
    }
}

impl fmt::Display for TimeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iso8601(s) => f.write_str(s),
            Self::SecondsSinceEpoch(secs) => write!(f, "{secs}s"),
        }
    }
}

impl From<&str> for TimeTag {
    fn from(s: &str) -> Self {
        Self::Iso8601(s.to_owned())
    }
}

impl From<String> for TimeTag {
    fn from(s: String) -> Self {
        Self::Iso8601(s)
    }
}

impl From<f64> for TimeTag {
    fn from(secs: f64) -> Self {
        Self::SecondsSinceEpoch(secs)
    }
}

#[cfg(feature = "time")]
mod resolve {
    use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};

    use super::TimeTag;
    use crate::util::{Error, Result};

    impl TimeTag {
        /// Parse an ISO-8601 date-time into a UTC instant.
        ///
        /// Accepts RFC 3339 strings, zone-less date-times (read as UTC) and
        /// bare dates (midnight UTC).
        pub fn parse_iso8601(s: &str) -> Result<DateTime<Utc>> {
            if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
                return Ok(dt.with_timezone(&Utc));
            }
            for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
                if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
                    return Ok(naive.and_utc());
                }
            }
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
                .ok_or_else(|| Error::InvalidTime(s.to_owned()))
        }

        /// Resolve to a UTC instant.
        ///
        /// Seconds-since-epoch tags need the property's `epoch`; ISO-8601 tags
        /// ignore it.
        pub fn resolve(&self, epoch: Option<&str>) -> Result<DateTime<Utc>> {
            match self {
                Self::Iso8601(s) => Self::parse_iso8601(s),
                Self::SecondsSinceEpoch(secs) => {
                    let epoch = epoch.ok_or_else(|| {
                        Error::InvalidTime(format!("{secs}s without an epoch"))
                    })?;
                    let base = Self::parse_iso8601(epoch)?;
                    if !secs.is_finite() {
                        return Err(Error::InvalidTime(format!("{secs}s")));
                    }
                    let nanos = (secs * 1e9).round();
                    if nanos.abs() >= i64::MAX as f64 {
                        return Err(Error::InvalidTime(format!("{secs}s out of range")));
                    }
                    base.checked_add_signed(Duration::nanoseconds(nanos as i64))
                        .ok_or_else(|| Error::InvalidTime(format!("{epoch} + {secs}s")))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_prefers_string() {
        let t = TimeTag::decode(&json!("2012-08-04T16:00:00Z")).unwrap();
        assert_eq!(t, TimeTag::iso("2012-08-04T16:00:00Z"));

        let t = TimeTag::decode(&json!(30.5)).unwrap();
        assert_eq!(t, TimeTag::seconds(30.5));
    }

    #[test]
    fn test_decode_rejects_other_kinds() {
        assert!(matches!(
            TimeTag::decode(&json!(true)),
            Err(Error::UnexpectedType { .. })
        ));
        assert!(TimeTag::decode(&json!(null)).is_err());
    }

    #[test]
    fn test_encode_keeps_variant() {
        assert_eq!(TimeTag::iso("2012").encode(), json!("2012"));
        assert_eq!(TimeTag::seconds(2.0).encode(), json!(2.0));
    }

    #[test]
    fn test_serde_untagged() {
        let t: TimeTag = serde_json::from_value(json!(12.0)).unwrap();
        assert_eq!(t, TimeTag::seconds(12.0));
        let t: TimeTag = serde_json::from_value(json!("x")).unwrap();
        assert_eq!(t.as_iso8601(), Some("x"));
    }

    #[cfg(feature = "time")]
    #[test]
    fn test_resolve() {
        use chrono::{TimeZone, Utc};

        let epoch = "2012-08-04T16:00:00Z";
        let expected = Utc.with_ymd_and_hms(2012, 8, 4, 16, 0, 30).unwrap();
        assert_eq!(TimeTag::seconds(30.0).resolve(Some(epoch)).unwrap(), expected);
        assert_eq!(
            TimeTag::iso("2012-08-04T16:00:30Z").resolve(None).unwrap(),
            expected
        );
        assert_eq!(
            TimeTag::iso("2012-08-04T16:00:30").resolve(None).unwrap(),
            expected
        );
        assert!(matches!(
            TimeTag::seconds(1.0).resolve(None),
            Err(Error::InvalidTime(_))
        ));
        assert!(TimeTag::iso("not a time").resolve(None).is_err());
    }
}
