//! Reusable UI components shared across pages.

pub mod header;
pub mod toast_host;
