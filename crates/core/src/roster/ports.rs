//! Port interfaces for the roster side of the portal API
//!
//! These traits define the boundary between the reporting rules and the
//! infrastructure that talks to the portal backend.

use async_trait::async_trait;
use socportal_domain::{Result, RosterDay, ShiftRequest};

/// Source of one month's roster rows
#[async_trait]
pub trait RosterProvider: Send + Sync {
    /// Fetch the per-day roster rows for `month`/`year`, date-ascending
    async fn fetch_roster(&self, month: u32, year: i32) -> Result<Vec<RosterDay>>;
}

/// Sink for shift-exchange and leave requests
///
/// Submissions mutate the backing store that subsequent roster fetches
/// reflect; the mutation itself is entirely server-side.
#[async_trait]
pub trait ShiftRequestGateway: Send + Sync {
    /// File a shift-exchange request
    async fn submit_exchange(&self, request: &ShiftRequest) -> Result<()>;

    /// File a leave request
    async fn submit_leave(&self, request: &ShiftRequest) -> Result<()>;
}
