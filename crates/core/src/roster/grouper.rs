//! Calendar-week grouping of roster days
//!
//! Weeks start on Sunday. The input is one month of ascending-date rows, so
//! the first group may be a partial week (month starts mid-week) and so may
//! the last (month ends before Saturday).

use chrono::Weekday;
use socportal_domain::{RosterDay, WeekGroup};

/// Partition `days` into calendar weeks starting on Sunday.
///
/// Lossless: concatenating the returned groups reproduces `days` exactly, in
/// order. Empty input yields no groups. Assumes (does not enforce) that the
/// input is date-ascending and covers a single month.
pub fn group_by_week(days: Vec<RosterDay>) -> Vec<WeekGroup> {
    let mut weeks = Vec::new();
    let mut current = WeekGroup::default();

    for day in days {
        if day.weekday() == Weekday::Sun && !current.is_empty() {
            weeks.push(std::mem::take(&mut current));
        }
        current.days.push(day);
    }

    if !current.is_empty() {
        weeks.push(current);
    }

    weeks
}
