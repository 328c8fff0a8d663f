//! Domain data types
//!
//! Wire shapes mirroring the portal API's JSON contract, plus the derived
//! reporting types produced by `socportal-core`.

pub mod api;
pub mod portal;
pub mod roster;

pub use api::*;
pub use portal::*;
pub use roster::*;
