//! API middleware stack.
//!
//! The kiosk API is bound to localhost and unauthenticated; the only layer is
//! the access log.

pub mod audit;
