//! Roster types
//!
//! One [`RosterDay`] per calendar date of a queried month, with one shift
//! cell per team-member short name. Cells arrive from a manually maintained
//! Excel upload, so unknown spellings are tolerated everywhere: parsing a
//! cell yields `Option<ShiftCode>` and never an error.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, DateTime, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::NO_COVER_SENTINEL;

/* -------------------------------------------------------------------------- */
/* Shift codes */
/* -------------------------------------------------------------------------- */

/// Duty category for a team member on a given day
///
/// Closed enumeration matching the portal's wire spellings (`REGULAR`,
/// `MORNING`, ...). Values outside this set are treated as unknown/blank by
/// the aggregation layer rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ShiftCode {
    Regular,
    Morning,
    Noon,
    Evening,
    Night,
    OffDay,
    Leave,
}

impl ShiftCode {
    /// All codes, in display order
    pub const ALL: [Self; 7] = [
        Self::Regular,
        Self::Morning,
        Self::Noon,
        Self::Evening,
        Self::Night,
        Self::OffDay,
        Self::Leave,
    ];

    /// Lenient parse: trims whitespace and ignores case.
    ///
    /// Returns `None` for anything outside the closed set; callers decide
    /// whether to count the miss (see the aggregator's
    /// `unrecognized_cells`).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "REGULAR" => Some(Self::Regular),
            "MORNING" => Some(Self::Morning),
            "NOON" => Some(Self::Noon),
            "EVENING" => Some(Self::Evening),
            "NIGHT" => Some(Self::Night),
            "OFFDAY" => Some(Self::OffDay),
            "LEAVE" => Some(Self::Leave),
            _ => None,
        }
    }

    /// Wire spelling of the code
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "REGULAR",
            Self::Morning => "MORNING",
            Self::Noon => "NOON",
            Self::Evening => "EVENING",
            Self::Night => "NIGHT",
            Self::OffDay => "OFFDAY",
            Self::Leave => "LEAVE",
        }
    }

    /// Whether the code counts towards a member's workdays
    pub const fn is_working(self) -> bool {
        !matches!(self, Self::OffDay | Self::Leave)
    }
}

impl fmt::Display for ShiftCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/* -------------------------------------------------------------------------- */
/* Shift change notes */
/* -------------------------------------------------------------------------- */

/// Kind of roster change a note records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteKind {
    /// Swap of shift assignments between two members for one date
    ShiftExchange,
    /// Leave taken on one date, optionally with a covering member
    TakeLeave,
}

/// Record of a shift-exchange or leave request affecting one day/member
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftChangeNote {
    /// Request kind (wire field `type`)
    #[serde(rename = "type")]
    pub kind: NoteKind,
    /// Date the request concerns
    pub request_date: NaiveDate,
    /// Timestamp the request was filed
    pub created_at: DateTime<Utc>,
    /// Identifier of the requesting member
    pub requested_by: String,
    /// Display name of the requesting member
    pub requested_by_name: String,
    /// The requester's shift at the time of the request
    pub your_shift: ShiftCode,
    /// The shift after the change
    pub updated_shift: ShiftCode,
    /// Counterpart in an exchange, or the covering member for leave.
    /// The wire uses the literal string "None" for leave without cover.
    #[serde(default)]
    pub assigned_to: Option<String>,
    pub reason: String,
    pub handover_task: String,
    pub communicated_person: String,
}

impl ShiftChangeNote {
    /// Counterpart/covering member, with the `"None"` sentinel normalized away
    pub fn cover(&self) -> Option<&str> {
        self.assigned_to.as_deref().filter(|v| *v != NO_COVER_SENTINEL && !v.is_empty())
    }

    /// Checks the note against its kind's invariant.
    ///
    /// A `ShiftExchange` must actually change the shift; a `TakeLeave` must
    /// end in [`ShiftCode::Leave`]. Inconsistent notes are kept (the upstream
    /// store already accepted them) but callers can surface them.
    pub fn is_consistent(&self) -> bool {
        match self.kind {
            NoteKind::ShiftExchange => self.updated_shift != self.your_shift,
            NoteKind::TakeLeave => self.updated_shift == ShiftCode::Leave,
        }
    }
}

/* -------------------------------------------------------------------------- */
/* Roster days */
/* -------------------------------------------------------------------------- */

/// One roster row: a calendar date plus one shift cell per team member
///
/// Member columns are dynamic (the team changes over time), so they are
/// captured in a flattened map of raw JSON values and decoded lazily via
/// [`RosterDay::shift_for`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterDay {
    /// Calendar date, unique within a query result
    pub date: NaiveDate,
    /// Persisted weekday name, redundant with `date` but kept for display
    pub day: String,
    /// Shift-exchange / leave notes attached to this date
    #[serde(default)]
    pub notes: Vec<ShiftChangeNote>,
    /// Raw shift cells keyed by team-member short name
    #[serde(flatten)]
    pub shifts: BTreeMap<String, Value>,
}

impl RosterDay {
    /// Decoded shift for `member`, or `None` for a missing, non-string or
    /// unrecognized cell
    pub fn shift_for(&self, member: &str) -> Option<ShiftCode> {
        self.raw_shift(member).and_then(ShiftCode::parse)
    }

    /// Raw string cell for `member`, if present and a string
    pub fn raw_shift(&self, member: &str) -> Option<&str> {
        self.shifts.get(member).and_then(Value::as_str)
    }

    /// Weekday derived from `date` (authoritative over the `day` field)
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }
}

/* -------------------------------------------------------------------------- */
/* Derived reporting types */
/* -------------------------------------------------------------------------- */

/// One calendar week of consecutive roster days
///
/// Produced by the roster grouper: every group after the first starts on a
/// Sunday, and no group holds more than seven days.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeekGroup {
    pub days: Vec<RosterDay>,
}

impl WeekGroup {
    /// Whether the group's first day falls on a Sunday
    pub fn starts_on_sunday(&self) -> bool {
        self.days.first().is_some_and(|d| d.weekday() == Weekday::Sun)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Per-member shift tallies for one month, with derived metrics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberShiftSummary {
    pub regular: u32,
    pub morning: u32,
    pub noon: u32,
    pub evening: u32,
    pub night: u32,
    pub offday: u32,
    pub leave: u32,
    /// Derived: regular + morning + noon + evening + night
    pub workdays: u32,
    /// Derived: (workdays + leave) − the month's nominal workday count.
    /// Negative means under-scheduled, positive over-scheduled.
    pub gap: i32,
}

impl MemberShiftSummary {
    /// Increment the counter for `code`
    pub fn record(&mut self, code: ShiftCode) {
        *self.counter_mut(code) += 1;
    }

    /// Counter value for `code`
    pub const fn count(&self, code: ShiftCode) -> u32 {
        match code {
            ShiftCode::Regular => self.regular,
            ShiftCode::Morning => self.morning,
            ShiftCode::Noon => self.noon,
            ShiftCode::Evening => self.evening,
            ShiftCode::Night => self.night,
            ShiftCode::OffDay => self.offday,
            ShiftCode::Leave => self.leave,
        }
    }

    /// Sum of all seven counters
    pub fn total(&self) -> u32 {
        ShiftCode::ALL.iter().map(|c| self.count(*c)).sum()
    }

    /// Compute the derived `workdays` and `gap` fields.
    ///
    /// Called once after all days have been tallied (two-pass aggregation).
    pub fn finalize(&mut self, total_workdays_in_month: u32) {
        self.workdays = self.regular + self.morning + self.noon + self.evening + self.night;
        self.gap = (self.workdays + self.leave) as i32 - total_workdays_in_month as i32;
    }

    fn counter_mut(&mut self, code: ShiftCode) -> &mut u32 {
        match code {
            ShiftCode::Regular => &mut self.regular,
            ShiftCode::Morning => &mut self.morning,
            ShiftCode::Noon => &mut self.noon,
            ShiftCode::Evening => &mut self.evening,
            ShiftCode::Night => &mut self.night,
            ShiftCode::OffDay => &mut self.offday,
            ShiftCode::Leave => &mut self.leave,
        }
    }
}

/// Whole-month summary: one [`MemberShiftSummary`] per member plus the
/// month-level figures the derivations used
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    /// Summaries keyed by member short name
    pub members: BTreeMap<String, MemberShiftSummary>,
    /// Nominal workday count of the queried month (weekend excluded)
    pub total_workdays: u32,
    /// Cells that failed the lenient shift-code parse and were skipped.
    /// Non-blocking data-quality signal; never an error.
    pub unrecognized_cells: u32,
}

/// Combined monthly roster view: grouped weeks plus the member summary table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    pub weeks: Vec<WeekGroup>,
    pub summary: MonthlySummary,
}
