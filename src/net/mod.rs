//! Network layer: wire types and the single login call.

pub mod api;
pub mod types;
