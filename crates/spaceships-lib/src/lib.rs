//! Spaceships library entry points.
//!
//! This crate exposes the configuration bundle, the spaceship record type,
//! the SQLite-backed store, and the feature-gated catalog service. The HTTP
//! binary should only depend on the items exported here instead of reaching
//! into the modules directly.

#![deny(warnings)]

pub mod config;
pub mod error;
pub mod model;
pub mod service;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};
pub use model::Spaceship;
pub use service::SpaceshipService;
pub use store::{SpaceshipStore, SqliteSpaceshipStore};
