//! Timestamp helpers
//!
//! Every record carries `createdAt`/`updatedAt` as ISO-8601 strings with
//! millisecond precision (`2024-01-15T00:00:00.000Z`), the same shape a
//! browser's `Date.toISOString()` produces. Timestamps are truncated to
//! milliseconds when created or parsed so a document survives a
//! serialize/deserialize cycle unchanged.

use chrono::{DateTime, Duration, NaiveDate, SecondsFormat, SubsecRound, TimeZone, Utc};

/// A UTC instant with millisecond precision
pub type Timestamp = DateTime<Utc>;

/// Returns the current instant truncated to milliseconds
pub fn now() -> Timestamp {
    Utc::now().trunc_subsecs(3)
}

/// Truncates a caller-supplied instant to the persisted precision
pub fn truncate(ts: Timestamp) -> Timestamp {
    ts.trunc_subsecs(3)
}

/// Returns a timestamp strictly later than `previous`
///
/// Normally this is just [`now`]; when the clock has not advanced past
/// `previous` (two writes in the same millisecond, or a stored timestamp
/// from the future) it is `previous + 1ms`.
pub fn next_after(previous: Timestamp) -> Timestamp {
    let current = now();
    if current > previous {
        current
    } else {
        previous + Duration::milliseconds(1)
    }
}

/// Formats a timestamp the way it is persisted
pub fn format(ts: &Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses a stored date value
///
/// Accepts a full RFC 3339 timestamp or a bare `YYYY-MM-DD` date (midnight
/// UTC, as written by HTML date inputs). Blank input means "no date".
pub fn parse_lenient(raw: &str) -> Result<Option<Timestamp>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(ts.with_timezone(&Utc).trunc_subsecs(3)));
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{}': {}", raw, e))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| format!("invalid date '{}'", raw))?;

    Ok(Some(Utc.from_utc_datetime(&midnight)))
}

/// Serde adapter for required timestamps
pub mod millis {
    use super::Timestamp;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format(ts))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Timestamp, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_lenient(&raw)
            .map_err(D::Error::custom)?
            .ok_or_else(|| D::Error::custom("timestamp must not be empty"))
    }
}

/// Serde adapter for optional dates (`dueDate`, `validUntil`, ...)
///
/// `null`, a missing field and an empty string all read as `None`.
pub mod millis_option {
    use super::Timestamp;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        ts: &Option<Timestamp>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match ts {
            Some(ts) => serializer.serialize_str(&super::format(ts)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Timestamp>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => super::parse_lenient(&raw).map_err(D::Error::custom),
            None => Ok(None),
        }
    }
}
