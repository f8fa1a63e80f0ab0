//! Shared application state for the axum handlers.

use std::sync::Arc;

use spaceships_lib::SpaceshipService;

/// Shared state handed to every handler via axum's `State` extractor.
///
/// Cheaply cloneable; the service (and through it the store handle) is held
/// behind an `Arc` so all concurrent request handlers see the same instance.
#[derive(Clone)]
pub struct AppState {
    service: Arc<SpaceshipService>,
}

impl AppState {
    /// Wrap a constructed service for sharing across handlers.
    pub fn new(service: SpaceshipService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Access the catalog service.
    pub fn service(&self) -> &SpaceshipService {
        &self.service
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service", self.service.as_ref())
            .finish()
    }
}
