//! API endpoint handlers.
//!
//! Each module corresponds to one step of the kiosk wizard or to the scale
//! bridge. Handlers only translate wire payloads; the numbers come from
//! `crate::assessment`.

pub mod body;
pub mod device;
pub mod health;
pub mod report;
pub mod vitals;
