//! Shared client-side state modules.
//!
//! Split by domain so components depend on small focused models: `session`
//! owns authentication, `toast` owns transient notifications.

pub mod session;
pub mod toast;
