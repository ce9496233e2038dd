use std::sync::Arc;

use haven::{Catalog, InMemoryStoryStore, ModerationGate, StoryStore};
use metrics_exporter_prometheus::PrometheusHandle;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};

/// Shared application state
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Immutable seed catalogs (shared across requests)
    pub catalog: Catalog,

    /// Story registry; `None` when no backend is wired up in this
    /// deployment.
    pub store: Option<Arc<dyn StoryStore>>,

    /// Content-safety gate
    pub gate: ModerationGate,

    /// Prometheus render handle, present once the recorder is installed
    /// at startup.
    pub metrics: Option<PrometheusHandle>,
}

impl ServerState {
    /// Create new server state
    pub fn new(config: ServerConfig) -> Self {
        let store: Option<Arc<dyn StoryStore>> = config
            .story_store_enabled
            .then(|| Arc::new(InMemoryStoryStore::new()) as Arc<dyn StoryStore>);
        let gate = ModerationGate::new(config.moderation.clone());

        Self {
            config: Arc::new(config),
            catalog: Catalog::seed(),
            store,
            gate,
            metrics: None,
        }
    }

    /// The story store, or the deployment-level unavailability error.
    pub fn story_store(&self) -> ServerResult<&Arc<dyn StoryStore>> {
        self.store
            .as_ref()
            .ok_or(ServerError::PersistenceUnavailable)
    }
}
