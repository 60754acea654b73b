//! Company ↔ supplier association management.

use std::sync::Arc;

use crate::application::services::resource_service::{expect_status, expect_status_or_missing};
use crate::domain::entities::{Link, LinkRequest, Supplier};
use crate::domain::gateways::BackendGateway;
use crate::domain::{Listing, Outcome};
use crate::error::ProxyError;

const COMMUNICATION_FAILURE: &str = "failed to communicate with the backend";

/// Service for linking suppliers to companies.
///
/// Follows the same proxy pattern as
/// [`crate::application::services::ResourceService`], keyed on a
/// `(company_id, supplier_id)` pair instead of a single id.
pub struct AssociationService {
    backend: Arc<dyn BackendGateway>,
}

impl AssociationService {
    /// Creates a new association service.
    pub fn new(backend: Arc<dyn BackendGateway>) -> Self {
        Self { backend }
    }

    /// Lists the suppliers linked to a company.
    ///
    /// A non-200 answer yields an empty listing without a warning; only a
    /// transport failure or an undecodable body is surfaced.
    pub async fn list_for_company(&self, company_id: i64) -> Listing<Supplier> {
        match self.fetch_linked(company_id).await {
            Ok(items) => Listing::loaded(items),
            Err(e) => {
                tracing::warn!(error = %e, company_id, "Failed to load linked suppliers");
                Listing::failed("Error loading the company's suppliers.")
            }
        }
    }

    /// Links a supplier to a company.
    ///
    /// Both ids are required; succeeds on backend status 200 or 201.
    pub async fn link(&self, request: LinkRequest) -> Outcome {
        let Some(link) = request.link() else {
            return Outcome::error("Invalid data for linking.");
        };

        match self.send_link(link).await {
            Ok(()) => Outcome::ok("Link created successfully."),
            Err(ProxyError::Transport(e)) => {
                tracing::warn!(error = %e, ?link, "Link request failed");
                Outcome::error(format!("Error creating link ({COMMUNICATION_FAILURE})."))
            }
            Err(e) => Outcome::error(format!("Error creating link: {e}")),
        }
    }

    /// Removes the link between a supplier and a company.
    ///
    /// Both ids are required; a partial request is rejected without
    /// contacting the backend. Succeeds on backend status 200 or 204.
    pub async fn unlink(&self, request: LinkRequest) -> Outcome {
        let Some(link) = request.link() else {
            return Outcome::error("Invalid data for unlinking.");
        };

        match self.send_unlink(link).await {
            Ok(()) => Outcome::ok("Link removed successfully."),
            Err(ProxyError::NotFound) => Outcome::error("Company, supplier, or link not found."),
            Err(ProxyError::Backend { status: 400, body }) if body.is_empty() => {
                Outcome::error("Could not unlink.")
            }
            Err(ProxyError::Backend { status: 400, body }) => Outcome::error(body),
            Err(ProxyError::Transport(e)) => {
                tracing::warn!(error = %e, ?link, "Unlink request failed");
                Outcome::error(format!("Error unlinking ({COMMUNICATION_FAILURE})."))
            }
            Err(e) => Outcome::error(format!("Error unlinking: {e}")),
        }
    }

    async fn fetch_linked(&self, company_id: i64) -> Result<Vec<Supplier>, ProxyError> {
        let response = self
            .backend
            .get(&format!("empresas/{company_id}/fornecedores"))
            .await?;
        if response.status != 200 {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    async fn send_link(&self, link: Link) -> Result<(), ProxyError> {
        let response = self.backend.post(&link.path(), None).await?;
        expect_status(&response, &[200, 201])
    }

    async fn send_unlink(&self, link: Link) -> Result<(), ProxyError> {
        let response = self.backend.delete(&link.path()).await?;
        expect_status_or_missing(&response, &[200, 204])
    }
}
