//! Application context: configuration plus the wired-up stores and client.

use std::sync::Arc;
use std::time::Duration;

use herb_classify::ClassifierClient;
use herb_config::HerbConfig;
use herb_store::{AccountStore, FileStore, HistoryStore, MemoryStore, SessionContext, Substrate};

/// Everything a command handler needs, built once per invocation.
///
/// All stores share one substrate, so the session slot an account store
/// write lands in is the one the history store and handlers read.
pub struct AppContext {
    pub config: HerbConfig,
    pub accounts: AccountStore,
    pub session: SessionContext,
    pub history: HistoryStore,
    pub classifier: ClassifierClient,
}

impl AppContext {
    /// Wire stores and client from configuration.
    ///
    /// With no usable data directory the context degrades to an in-memory
    /// substrate: every operation works, nothing persists.
    #[must_use]
    pub fn init(config: HerbConfig) -> Self {
        let substrate: Arc<dyn Substrate> = match config.storage.resolved_dir() {
            Some(dir) => {
                tracing::debug!(dir = %dir.display(), "using file substrate");
                Arc::new(FileStore::open(dir))
            }
            None => {
                if !config.storage.is_in_memory() {
                    tracing::warn!("no data directory available; state will not persist");
                }
                Arc::new(MemoryStore::new())
            }
        };

        let classifier = ClassifierClient::new(
            &config.classifier.base_url,
            Duration::from_secs(config.classifier.timeout_secs),
        );

        Self {
            config,
            accounts: AccountStore::new(Arc::clone(&substrate)),
            session: SessionContext::new(Arc::clone(&substrate)),
            history: HistoryStore::new(substrate),
            classifier,
        }
    }
}

/// Config selecting the ephemeral in-memory substrate, for tests.
#[cfg(test)]
pub(crate) fn memory_config() -> HerbConfig {
    let mut config = HerbConfig::default();
    config.storage.data_dir = herb_config::IN_MEMORY.to_string();
    config
}
