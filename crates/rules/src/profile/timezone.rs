//! Zero-timezone check shared by profiles.
//!
//! A timestamp qualifies for the finding when it has no zone suffix, a `Z`,
//! or an explicit offset of zero (`+00:00` or `-00:00`). CAP reserves
//! `-00:00` for "UTC, local zone unknown", which is exactly what profiles
//! want producers to avoid. Absent or blank values are not flagged.

use capguard_core::CapTimestamp;

use crate::error::Result;
use crate::reason::{Reason, RecommendationType};

/// Returns a finding at `path` when `value` lacks a meaningful zone offset.
///
/// Fails only if `value` is present but not a parseable timestamp.
pub fn zero_timezone_finding(
    value: Option<&str>,
    path: &str,
    kind: RecommendationType,
) -> Result<Option<Reason>> {
    let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
        return Ok(None);
    };

    let timestamp = CapTimestamp::parse(value)?;
    Ok(timestamp
        .has_zero_offset()
        .then(|| Reason::new(path, kind)))
}
