//! HTTP glue for the spaceships catalog service.
//!
//! All catalog behavior lives in `spaceships-lib`; this crate provides only
//! the axum router, the shared application state, and logging setup. The
//! binary's `main` wires the object graph together and serves the router.

#![deny(warnings)]

pub mod logging;
mod routes;
mod state;

pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use routes::router;
pub use state::AppState;
