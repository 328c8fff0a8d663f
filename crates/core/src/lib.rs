//! # SOC Portal Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The roster reporting rules (week grouping, shift summaries, workday
//!   calendar)
//! - The portal access grouping rules
//! - Port/adapter interfaces (traits) for the upstream portal API
//! - Services orchestrating ports and pure functions
//!
//! ## Architecture Principles
//! - Only depends on `socportal-domain`
//! - No HTTP or platform code
//! - All external collaborators reached via traits
//! - Pure, testable business logic

pub mod portal;
pub mod roster;

// Re-export specific items to avoid ambiguity
pub use portal::grouper::group_by_url;
pub use portal::ports::PortalLogProvider;
pub use portal::PortalTrackerService;
pub use roster::grouper::group_by_week;
pub use roster::ports::{RosterProvider, ShiftRequestGateway};
pub use roster::summary::{summarize, total_workdays};
pub use roster::RosterService;
