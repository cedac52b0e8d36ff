// Resell comps HTTP API
//
// Serves sold-listing price statistics and active listings for a free-text
// query. The extraction pipeline lives in the `comps` crate; this crate wires
// it to real transports, an in-memory result cache and axum routes.

pub mod config;
pub mod server;

pub use config::*;
