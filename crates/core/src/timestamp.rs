//! CAP timestamp parsing.
//!
//! CAP date-times look like `2003-04-02T14:39:01-05:00`. Producers in the
//! wild also send a trailing `Z` or drop the zone entirely, so the parser
//! records which zone designator was used alongside the instant itself.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// How the zone of a timestamp was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneDesignator {
    /// No zone suffix at all. The instant is read as UTC.
    Missing,
    /// A trailing `Z`.
    Utc,
    /// An explicit `+hh:mm` / `-hh:mm` suffix, `-00:00` included.
    Offset(i32),
}

/// A parsed CAP timestamp: a comparable instant plus its zone designator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapTimestamp {
    instant: DateTime<Utc>,
    zone: ZoneDesignator,
}

impl CapTimestamp {
    pub fn parse(raw: &str) -> Result<Self> {
        let value = raw.trim();
        if value.is_empty() {
            return Err(invalid(raw, "empty value"));
        }

        let (naive_part, zone) = split_zone(value).map_err(|reason| invalid(raw, reason))?;
        let naive = NaiveDateTime::parse_from_str(naive_part, NAIVE_FORMAT)
            .map_err(|e| invalid(raw, &e.to_string()))?;

        let offset_secs = match zone {
            ZoneDesignator::Offset(secs) => secs,
            ZoneDesignator::Utc | ZoneDesignator::Missing => 0,
        };
        let offset = FixedOffset::east_opt(offset_secs)
            .ok_or_else(|| invalid(raw, "offset out of range"))?;
        let local: DateTime<FixedOffset> = offset
            .from_local_datetime(&naive)
            .single()
            .ok_or_else(|| invalid(raw, "ambiguous local time"))?;

        Ok(Self {
            instant: local.with_timezone(&Utc),
            zone,
        })
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    pub fn zone(&self) -> ZoneDesignator {
        self.zone
    }

    /// True when the value carries no usable zone information: no suffix,
    /// `Z`, or an offset of zero in either sign.
    pub fn has_zero_offset(&self) -> bool {
        matches!(
            self.zone,
            ZoneDesignator::Missing | ZoneDesignator::Utc | ZoneDesignator::Offset(0)
        )
    }

    pub fn is_after(&self, other: &CapTimestamp) -> bool {
        self.instant > other.instant
    }
}

fn invalid(value: &str, reason: &str) -> CoreError {
    CoreError::InvalidTimestamp {
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Split `value` into its local date-time part and zone designator.
fn split_zone(value: &str) -> std::result::Result<(&str, ZoneDesignator), &'static str> {
    if let Some(rest) = value.strip_suffix('Z').or_else(|| value.strip_suffix('z')) {
        return Ok((rest, ZoneDesignator::Utc));
    }

    // The date part itself contains '-', so only look at the last six bytes.
    if value.len() > 6 && value.is_char_boundary(value.len() - 6) {
        let (head, tail) = value.split_at(value.len() - 6);
        let bytes = tail.as_bytes();
        if (bytes[0] == b'+' || bytes[0] == b'-') && bytes[3] == b':' {
            let digits = [bytes[1], bytes[2], bytes[4], bytes[5]];
            if !digits.iter().all(u8::is_ascii_digit) {
                return Err("malformed offset");
            }
            let hours: i32 = tail[1..3].parse().map_err(|_| "malformed offset hours")?;
            let minutes: i32 = tail[4..6].parse().map_err(|_| "malformed offset minutes")?;
            if hours > 23 || minutes > 59 {
                return Err("offset out of range");
            }
            let secs = hours * 3600 + minutes * 60;
            let secs = if bytes[0] == b'-' { -secs } else { secs };
            return Ok((head, ZoneDesignator::Offset(secs)));
        }
    }

    Ok((value, ZoneDesignator::Missing))
}
