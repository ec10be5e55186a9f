//! Shared handler state

use std::sync::Arc;

use credit_common::AppConfig;
use credit_service::{LedgerService, ServiceContext};

/// Ledger dependencies and configuration, cloned into every handler
#[derive(Clone)]
pub struct AppState {
    service_context: Arc<ServiceContext>,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
        }
    }

    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Ledger service bound to this state's context
    pub fn ledger(&self) -> LedgerService<'_> {
        LedgerService::new(&self.service_context)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &self.service_context)
            .field("app", &self.config.app.name)
            .field("ledger_enabled", &self.config.ledger.enabled)
            .finish()
    }
}
