//! Portal API adapter

mod client;

pub use client::PortalApiClient;
