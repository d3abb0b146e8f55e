use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use address::AddressRepository;
use matcher::Matcher;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Shared state of the provider service
#[derive(Clone)]
pub struct ProviderState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Address store. Guards are never held across an `.await`.
    pub repository: Arc<RwLock<AddressRepository>>,
}

impl ProviderState {
    /// Create provider state, seeding the repository when configured to.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let repository = if config.seed_on_start {
            AddressRepository::with_seed_data()?
        } else {
            AddressRepository::new()
        };
        Ok(Self::with_repository(config, repository))
    }

    pub fn with_repository(config: ServerConfig, repository: AddressRepository) -> Self {
        Self {
            config: Arc::new(config),
            repository: Arc::new(RwLock::new(repository)),
        }
    }

    pub fn read(&self) -> ServerResult<RwLockReadGuard<'_, AddressRepository>> {
        self.repository
            .read()
            .map_err(|_| ServerError::Internal("address repository lock poisoned".into()))
    }

    pub fn write(&self) -> ServerResult<RwLockWriteGuard<'_, AddressRepository>> {
        self.repository
            .write()
            .map_err(|_| ServerError::Internal("address repository lock poisoned".into()))
    }
}

/// Shared state of the consumer service
#[derive(Clone)]
pub struct ConsumerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Matcher backed by the provider (shared across requests)
    pub matcher: Arc<Matcher>,
}

impl ConsumerState {
    /// Create consumer state talking to `config.provider_url`.
    pub fn new(config: ServerConfig) -> Self {
        let matcher = Matcher::from_provider_url(config.provider_url.clone());
        Self::with_matcher(config, matcher)
    }

    pub fn with_matcher(config: ServerConfig, matcher: Matcher) -> Self {
        Self {
            config: Arc::new(config),
            matcher: Arc::new(matcher),
        }
    }
}
