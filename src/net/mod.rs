//! Network layer: the HTTP client wrapper, REST endpoint helpers, and
//! the wire types shared with the server.

pub mod api;
pub mod client;
pub mod types;
