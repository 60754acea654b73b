//! Shared application state injected into every handler.

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::application::services::{
    AssociationService, CompanyService, PostalService, SupplierService,
};
use crate::config::Config;
use crate::domain::gateways::{BackendGateway, PostalProvider};
use crate::infrastructure::http::{HttpBackendClient, HttpPostalProvider};

/// Services shared across requests.
///
/// Everything in here is immutable after startup; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub company_service: Arc<CompanyService>,
    pub supplier_service: Arc<SupplierService>,
    pub association_service: Arc<AssociationService>,
    pub postal_service: Arc<PostalService>,
    pub backend: Arc<dyn BackendGateway>,
}

impl AppState {
    /// Wires the services on top of the given gateways.
    pub fn new(
        backend: Arc<dyn BackendGateway>,
        primary: Arc<dyn PostalProvider>,
        fallback: Arc<dyn PostalProvider>,
    ) -> Self {
        let postal_service = Arc::new(PostalService::new(primary, fallback));

        Self {
            company_service: Arc::new(CompanyService::new(
                backend.clone(),
                postal_service.clone(),
            )),
            supplier_service: Arc::new(SupplierService::new(
                backend.clone(),
                postal_service.clone(),
            )),
            association_service: Arc::new(AssociationService::new(backend.clone())),
            postal_service,
            backend,
        }
    }

    /// Builds the HTTP gateways described by the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend URL is invalid or an HTTP client
    /// cannot be built.
    pub fn from_config(config: &Config) -> Result<Self> {
        let backend = HttpBackendClient::new(config.backend_url()?, config.backend_timeout())
            .context("Failed to build backend HTTP client")?;
        tracing::debug!("Backend client ready for {}", backend.base_url());

        let primary = HttpPostalProvider::new(&config.postal_primary_url, config.postal_timeout())
            .context("Failed to build primary postal provider")?;
        let fallback =
            HttpPostalProvider::new(&config.postal_fallback_url, config.postal_timeout())
                .context("Failed to build fallback postal provider")?;

        Ok(Self::new(
            Arc::new(backend),
            Arc::new(primary),
            Arc::new(fallback),
        ))
    }
}
