//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! workspace.

use chrono::Weekday;

/// Weekdays the organisation treats as weekend (excluded from workday counts).
pub const WEEKEND: [Weekday; 2] = [Weekday::Fri, Weekday::Sat];

/// Sentinel credential value meaning "varies per person, not centrally
/// tracked". Part of the wire contract; do not change.
pub const INDIVIDUAL_SENTINEL: &str = "Individual";

/// Sentinel value for a leave request with nobody assigned to cover.
pub const NO_COVER_SENTINEL: &str = "None";

/// Default page size for portal tracker log queries.
pub const DEFAULT_PAGE_LIMIT: u32 = 20;

/// Upper bound on the number of days a week group can hold.
pub const DAYS_PER_WEEK: usize = 7;
