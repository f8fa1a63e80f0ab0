//! Feature-gated catalog service in front of the store.

use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::model::Spaceship;
use crate::store::SpaceshipStore;

/// The spaceship catalog service.
///
/// Applies the global feature gate from [`Config`] in front of a
/// [`SpaceshipStore`]; with the gate open it delegates unchanged, with the
/// gate closed it answers without touching the store at all.
#[derive(Clone)]
pub struct SpaceshipService {
    config: Config,
    store: Arc<dyn SpaceshipStore>,
}

impl SpaceshipService {
    /// Construct a service over the given configuration and store.
    pub fn new(config: Config, store: Arc<dyn SpaceshipStore>) -> Self {
        Self { config, store }
    }

    /// Return all spaceships, or an empty vector when the gate is closed.
    pub fn get_all(&self) -> Result<Vec<Spaceship>> {
        if self.config.service_enabled() {
            return self.store.list_all();
        }

        Ok(Vec::new())
    }

    /// Return the spaceship with the given identifier, or a zero-valued
    /// record when the gate is closed.
    ///
    /// The closed-gate value deliberately differs in kind from [`get_all`]'s
    /// empty vector; existing consumers depend on this exact behavior.
    ///
    /// [`get_all`]: SpaceshipService::get_all
    pub fn get_by_id(&self, id: i64) -> Result<Spaceship> {
        if self.config.service_enabled() {
            return self.store.fetch_by_id(id);
        }

        Ok(Spaceship::default())
    }
}

impl std::fmt::Debug for SpaceshipService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpaceshipService")
            .field("service_enabled", &self.config.service_enabled())
            .finish()
    }
}
