use chrono::{DateTime, Duration, Months, NaiveDateTime};

use chime_core::reminder::Cycle;

/// Minute-precision timestamp format used in the `next_date` column.
/// No seconds component, so repeated advance/format round-trips are stable.
pub const MINUTE_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Parse a stored due timestamp as UTC wall-clock time.
///
/// Accepts the canonical minute-precision form, a seconds-bearing variant,
/// and full RFC 3339 (offset is applied, then dropped). Anything else is
/// `None`: an unparseable timestamp means the reminder never fires.
pub fn parse_due(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, MINUTE_FORMAT))
        .ok()
}

/// Compute the due timestamp that follows `current_due` under `cycle`.
///
/// Returns `None` when the reminder should stop firing: non-recurring
/// cycles (`once`, unrecognised) and unparseable input. The result is
/// strictly after `current_due` and formatted at minute precision.
/// Pure; the evaluation instant plays no part.
pub fn next_occurrence(current_due: &str, cycle: Cycle) -> Option<String> {
    let base = parse_due(current_due)?;

    let next = match cycle {
        Cycle::Daily => base + Duration::days(1),
        Cycle::Weekly => base + Duration::days(7),
        // Calendar-aware: Jan 31 + 1 month lands on Feb 28/29, not Mar 2.
        Cycle::Monthly => base.checked_add_months(Months::new(1))?,
        Cycle::Once | Cycle::Unknown => return None,
    };

    Some(next.format(MINUTE_FORMAT).to_string())
}
