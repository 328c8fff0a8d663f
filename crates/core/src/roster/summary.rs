//! Per-member shift tallies and the workday calendar
//!
//! Aggregation is deliberately lenient: roster cells come from a manual Excel
//! upload, so unrecognized values are counted in a data-quality counter and
//! skipped rather than treated as errors.

use chrono::{Datelike, NaiveDate};
use socportal_domain::constants::WEEKEND;
use socportal_domain::{MemberShiftSummary, MonthlySummary, Result, RosterDay, SocPortalError};
use tracing::debug;

/// Count the calendar dates of `year`/`month` whose weekday is not part of
/// the organisation's weekend (Friday/Saturday).
///
/// Leap years fall out of the calendar arithmetic; February 2024 has 29 days
/// and 21 workdays.
///
/// # Errors
/// Returns `InvalidInput` if `month` is outside 1-12 or the first of the
/// month is not a representable date.
pub fn total_workdays(year: i32, month: u32) -> Result<u32> {
    if !(1..=12).contains(&month) {
        return Err(SocPortalError::InvalidInput(format!("month out of range: {month}")));
    }

    let mut date = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        SocPortalError::InvalidInput(format!("invalid calendar month: {year}-{month:02}"))
    })?;

    let mut count = 0;
    while date.month() == month {
        if !WEEKEND.contains(&date.weekday()) {
            count += 1;
        }
        date = match date.succ_opt() {
            Some(next) => next,
            // Only reachable at the end of the supported calendar range
            None => break,
        };
    }

    Ok(count)
}

/// Tally each member's shift codes across `days` and derive the `workdays`
/// and `gap` metrics against the nominal workday count of `year`/`month`.
///
/// Two passes: accumulate counters for every day, then finalize the derived
/// fields. Members without a single recognizable cell still get an all-zero
/// summary (their `gap` is minus the month's workday count).
///
/// Cells holding something other than a shift code are skipped; non-blank
/// ones increment `unrecognized_cells` as a non-blocking data-quality signal.
///
/// # Errors
/// Returns `InvalidInput` for an out-of-range `month` (via
/// [`total_workdays`]).
pub fn summarize(
    days: &[RosterDay],
    members: &[String],
    year: i32,
    month: u32,
) -> Result<MonthlySummary> {
    let nominal = total_workdays(year, month)?;

    let mut summary = MonthlySummary::default();
    for member in members {
        summary.members.entry(member.clone()).or_default();
    }

    for day in days {
        for member in members {
            let Some(raw) = day.shifts.get(member) else { continue };

            match raw.as_str().and_then(socportal_domain::ShiftCode::parse) {
                Some(code) => {
                    if let Some(entry) = summary.members.get_mut(member) {
                        entry.record(code);
                    }
                }
                None => {
                    // Blank cells are ordinary (off-roster days); only
                    // non-blank junk counts against data quality.
                    if !is_blank(raw) {
                        debug!(member = %member, date = %day.date, cell = %raw, "skipping unrecognized shift cell");
                        summary.unrecognized_cells += 1;
                    }
                }
            }
        }
    }

    summary.total_workdays = nominal;
    for entry in summary.members.values_mut() {
        entry.finalize(nominal);
    }

    Ok(summary)
}

fn is_blank(cell: &serde_json::Value) -> bool {
    match cell {
        serde_json::Value::Null => true,
        serde_json::Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Convenience wrapper used by reporting callers that only need one member's
/// numbers.
pub fn summarize_member(
    days: &[RosterDay],
    member: &str,
    year: i32,
    month: u32,
) -> Result<MemberShiftSummary> {
    let members = [member.to_string()];
    let summary = summarize(days, &members, year, month)?;
    Ok(summary.members.get(member).copied().unwrap_or_default())
}
