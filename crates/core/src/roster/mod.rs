//! Roster reporting rules and the service that drives them

pub mod grouper;
pub mod ports;
pub mod service;
pub mod summary;

pub use service::RosterService;
