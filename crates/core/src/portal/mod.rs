//! Portal access tracker grouping rules and service

pub mod grouper;
pub mod ports;
pub mod service;

pub use service::PortalTrackerService;
