// ABOUTME: Builds the API client and session manager a command runs against
// ABOUTME: One context per process, created from the resolved client configuration

use freelink_api::MarketplaceApi;
use freelink_auth::SessionManager;
use freelink_config::ClientConfig;
use freelink_core::Notifier;
use freelink_storage::{FileStore, KeyValueStore};
use std::sync::Arc;
use tracing::debug;

pub struct AppContext {
    pub config: ClientConfig,
    pub api: Arc<MarketplaceApi>,
    pub session: SessionManager,
    pub notifier: Arc<dyn Notifier>,
}

impl AppContext {
    /// Context persisting the session in `<session_dir>/session.json`
    pub fn new(config: ClientConfig, notifier: Arc<dyn Notifier>) -> Self {
        let storage = Arc::new(FileStore::in_dir(&config.session_dir));
        debug!("Session file: {}", storage.path().display());
        Self::with_storage(config, notifier, storage)
    }

    pub fn with_storage(
        config: ClientConfig,
        notifier: Arc<dyn Notifier>,
        storage: Arc<dyn KeyValueStore>,
    ) -> Self {
        let api = Arc::new(MarketplaceApi::from_config(&config, Arc::clone(&notifier)));
        let session = SessionManager::new(api.clone(), storage, Arc::clone(&notifier));

        Self {
            config,
            api,
            session,
            notifier,
        }
    }
}
