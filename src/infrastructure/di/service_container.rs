//! Service container for dependency injection
//!
//! Wires the parameter service with its store and confirmer.

use std::sync::Arc;

use crate::application::services::ParameterService;
use crate::config::Settings;
use crate::infrastructure::error::InfraResult;
use crate::infrastructure::ssm::SsmParameterStore;
use crate::infrastructure::traits::{Confirmer, ParameterStore, TerminalConfirmer};

/// Container holding the boundary implementations for one invocation.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Remote parameter store, scoped to one AWS profile
    pub store: Arc<dyn ParameterStore>,

    /// Overwrite confirmation prompt
    pub confirmer: Arc<dyn Confirmer>,
}

impl ServiceContainer {
    /// Create a container backed by AWS SSM for the given profile.
    pub fn new(settings: Settings, profile: &str) -> InfraResult<Self> {
        let store = SsmParameterStore::connect(profile, &settings)?;
        Ok(Self::with_deps(
            settings,
            Arc::new(store),
            Arc::new(TerminalConfirmer),
        ))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        store: Arc<dyn ParameterStore>,
        confirmer: Arc<dyn Confirmer>,
    ) -> Self {
        let settings = Arc::new(settings);

        Self {
            settings,
            store,
            confirmer,
        }
    }

    /// Parameter service wired to this container's boundaries.
    pub fn parameter_service(&self) -> ParameterService {
        ParameterService::new(Arc::clone(&self.store), Arc::clone(&self.confirmer))
    }
}
