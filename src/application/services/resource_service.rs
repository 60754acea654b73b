//! Generic CRUD proxy for backend resources.

use std::marker::PhantomData;
use std::sync::Arc;

use crate::application::services::PostalService;
use crate::domain::entities::PostalLookupResult;
use crate::domain::gateways::{BackendGateway, RawResponse};
use crate::domain::{AddressPayload, Listing, Outcome, Resource};
use crate::error::ProxyError;
use crate::utils::postal_code::normalize_postal_code;

/// Proxies list/fetch/create/update/delete for one resource kind.
///
/// Create and update run the postal code through [`PostalService`] first:
/// a rejected code aborts before the backend is contacted, and any address
/// detail the provider returns overrides the submitted address fields.
///
/// Each operation converts its [`ProxyError`] into an [`Outcome`] (or an
/// empty [`Listing`] / `None`), so callers only ever render results.
pub struct ResourceService<R: Resource> {
    backend: Arc<dyn BackendGateway>,
    postal: Arc<PostalService>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> ResourceService<R> {
    /// Creates a new resource service.
    pub fn new(backend: Arc<dyn BackendGateway>, postal: Arc<PostalService>) -> Self {
        Self {
            backend,
            postal,
            _resource: PhantomData,
        }
    }

    /// Lists all records, filtered client-side.
    ///
    /// Never fails: when the backend cannot be read the listing is empty
    /// and carries a warning.
    pub async fn list(&self, filter: &R::Filter) -> Listing<R> {
        match self.fetch_all().await {
            Ok(items) => Listing::loaded(
                items
                    .into_iter()
                    .filter(|item| item.matches(filter))
                    .collect(),
            ),
            Err(e) => {
                tracing::warn!(error = %e, collection = R::COLLECTION, "Failed to load listing");
                Listing::failed(format!("Error loading {}.", R::PLURAL))
            }
        }
    }

    /// Fetches a single record.
    ///
    /// Returns `None` for a missing record and for any failure alike.
    pub async fn fetch_one(&self, id: i64) -> Option<R> {
        match self.fetch_by_id(id).await {
            Ok(item) => item,
            Err(e) => {
                tracing::warn!(error = %e, collection = R::COLLECTION, id, "Failed to fetch record");
                None
            }
        }
    }

    /// Creates a record after resolving its postal code.
    ///
    /// Succeeds on backend status 200 or 201.
    pub async fn create(&self, input: R::Input) -> Outcome {
        let (input, advisory) = match self.prepare(input).await {
            Ok(prepared) => prepared,
            Err(reason) => return Outcome::error(reason),
        };

        match self.submit_create(input).await {
            Ok(()) => Outcome::succeeded(
                format!("{} created successfully.", R::TITLE),
                advisory.as_deref(),
            ),
            Err(e) => self.failure("creating", e),
        }
    }

    /// Updates a record after resolving its postal code.
    ///
    /// Succeeds on backend status 200 or 204; 404 reports the record as missing.
    pub async fn update(&self, id: i64, input: R::Input) -> Outcome {
        let (input, advisory) = match self.prepare(input).await {
            Ok(prepared) => prepared,
            Err(reason) => return Outcome::error(reason),
        };

        match self.submit_update(id, input).await {
            Ok(()) => Outcome::succeeded(
                format!("{} updated successfully.", R::TITLE),
                advisory.as_deref(),
            ),
            Err(e) => self.failure("updating", e),
        }
    }

    /// Deletes a record.
    ///
    /// Succeeds on backend status 200 or 204; 404 reports the record as missing.
    pub async fn delete(&self, id: i64) -> Outcome {
        match self.submit_delete(id).await {
            Ok(()) => Outcome::ok(format!("{} deleted successfully.", R::TITLE)),
            Err(e) => self.failure("deleting", e),
        }
    }

    /// Resolves the postal code and shapes the payload.
    ///
    /// An accepted postal code is submitted in its canonical 8-digit form.
    /// Returns the payload and the resolver's advisory, or the rejection reason.
    async fn prepare(&self, mut input: R::Input) -> Result<(R::Input, Option<String>), String> {
        let lookup = self.postal.resolve(input.postal_code()).await;

        if let PostalLookupResult::Invalid { reason } = &lookup {
            return Err(reason.clone());
        }

        if let Ok(code) = normalize_postal_code(input.postal_code()) {
            input.set_postal_code(code);
        }

        if let Some(address) = lookup.address() {
            input.apply_address(address);
        }
        input.normalize();

        Ok((input, lookup.message().map(str::to_owned)))
    }

    async fn fetch_all(&self) -> Result<Vec<R>, ProxyError> {
        let response = self.backend.get(R::COLLECTION).await?;
        if response.status != 200 {
            return Err(ProxyError::backend(response.status, &response.body));
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    async fn fetch_by_id(&self, id: i64) -> Result<Option<R>, ProxyError> {
        let response = self.backend.get(&self.item_path(id)).await?;
        if response.status != 200 {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&response.body)?))
    }

    async fn submit_create(&self, input: R::Input) -> Result<(), ProxyError> {
        let body = serde_json::to_value(&input)?;
        let response = self.backend.post(R::COLLECTION, Some(body)).await?;
        expect_status(&response, &[200, 201])
    }

    async fn submit_update(&self, id: i64, input: R::Input) -> Result<(), ProxyError> {
        let body = serde_json::to_value(&input)?;
        let response = self.backend.put(&self.item_path(id), body).await?;
        expect_status_or_missing(&response, &[200, 204])
    }

    async fn submit_delete(&self, id: i64) -> Result<(), ProxyError> {
        let response = self.backend.delete(&self.item_path(id)).await?;
        expect_status_or_missing(&response, &[200, 204])
    }

    fn item_path(&self, id: i64) -> String {
        format!("{}/{}", R::COLLECTION, id)
    }

    fn failure(&self, action: &str, error: ProxyError) -> Outcome {
        tracing::warn!(error = %error, collection = R::COLLECTION, action, "Backend operation failed");
        match error {
            ProxyError::NotFound => Outcome::error(format!("{} not found.", R::TITLE)),
            ProxyError::Transport(_) => Outcome::error(format!(
                "Error {action} {} (failed to communicate with the backend).",
                R::SINGULAR
            )),
            other => Outcome::error(format!("Error {action} {}: {other}", R::SINGULAR)),
        }
    }
}

/// Accepts the listed statuses, anything else becomes [`ProxyError::Backend`].
pub(crate) fn expect_status(response: &RawResponse, accepted: &[u16]) -> Result<(), ProxyError> {
    if response.status_in(accepted) {
        Ok(())
    } else {
        Err(ProxyError::backend(response.status, &response.body))
    }
}

/// Like [`expect_status`], with 404 mapped to [`ProxyError::NotFound`].
pub(crate) fn expect_status_or_missing(
    response: &RawResponse,
    accepted: &[u16],
) -> Result<(), ProxyError> {
    if response.status == 404 {
        return Err(ProxyError::NotFound);
    }
    expect_status(response, accepted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Severity;
    use crate::domain::entities::{
        Company, CompanyInput, PersonType, Supplier, SupplierFilter, SupplierInput,
    };
    use crate::domain::gateways::{MockBackendGateway, MockPostalProvider};
    use serde_json::json;

    fn postal(primary: MockPostalProvider, fallback: MockPostalProvider) -> Arc<PostalService> {
        Arc::new(PostalService::new(Arc::new(primary), Arc::new(fallback)))
    }

    fn postal_hit(body: serde_json::Value) -> Arc<PostalService> {
        let mut primary = MockPostalProvider::new();
        primary
            .expect_lookup()
            .returning(move |_| Ok(RawResponse::new(200, body.to_string())));
        let mut fallback = MockPostalProvider::new();
        fallback.expect_lookup().never();
        postal(primary, fallback)
    }

    fn postal_offline() -> Arc<PostalService> {
        let mut primary = MockPostalProvider::new();
        primary
            .expect_lookup()
            .returning(|_| Err(ProxyError::Transport("down".to_string())));
        let mut fallback = MockPostalProvider::new();
        fallback
            .expect_lookup()
            .returning(|_| Err(ProxyError::Transport("down".to_string())));
        postal(primary, fallback)
    }

    fn postal_untouched() -> Arc<PostalService> {
        let mut primary = MockPostalProvider::new();
        primary.expect_lookup().never();
        let mut fallback = MockPostalProvider::new();
        fallback.expect_lookup().never();
        postal(primary, fallback)
    }

    fn company_input(postal_code: &str) -> CompanyInput {
        CompanyInput {
            tax_id: Some("12345678000199".to_string()),
            trade_name: Some("Acme".to_string()),
            postal_code: Some(postal_code.to_string()),
            state: Some("rj".to_string()),
            city: Some("Niterói".to_string()),
            neighborhood: Some("Centro".to_string()),
        }
    }

    fn companies(backend: MockBackendGateway, postal: Arc<PostalService>) -> ResourceService<Company> {
        ResourceService::new(Arc::new(backend), postal)
    }

    fn suppliers(backend: MockBackendGateway) -> ResourceService<Supplier> {
        ResourceService::new(Arc::new(backend), postal_untouched())
    }

    // ─── CREATE ──────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_create_overrides_address_with_postal_detail() {
        let mut backend = MockBackendGateway::new();
        backend
            .expect_post()
            .withf(|path, body| {
                let body = body.as_ref().unwrap();
                path == "empresas"
                    && body["estado"] == "SP"
                    && body["cidade"] == "São Paulo"
                    && body["bairro"] == "Bela Vista"
                    && body["cep"] == "01310100"
            })
            .times(1)
            .returning(|_, _| Ok(RawResponse::new(201, "{}")));

        let service = companies(
            backend,
            postal_hit(json!({"uf": "SP", "cidade": "São Paulo", "bairro": "Bela Vista"})),
        );

        let outcome = service.create(company_input("01310-100")).await;

        assert!(outcome.success);
        assert_eq!(outcome.severity, Severity::Ok);
        assert_eq!(outcome.message, "Company created successfully.");
    }

    #[tokio::test]
    async fn test_create_keeps_form_values_the_detail_lacks() {
        let mut backend = MockBackendGateway::new();
        backend
            .expect_post()
            .withf(|_, body| {
                let body = body.as_ref().unwrap();
                body["estado"] == "SP" && body["cidade"] == "Niterói" && body["bairro"] == "Centro"
            })
            .times(1)
            .returning(|_, _| Ok(RawResponse::new(200, "")));

        let service = companies(backend, postal_hit(json!({"uf": "SP"})));

        let outcome = service.create(company_input("01310100")).await;

        assert!(outcome.success);
    }

    #[tokio::test]
    async fn test_create_uppercases_state() {
        let mut backend = MockBackendGateway::new();
        backend
            .expect_post()
            .withf(|_, body| body.as_ref().unwrap()["estado"] == "RJ")
            .times(1)
            .returning(|_, _| Ok(RawResponse::new(201, "")));

        let service = companies(backend, postal_offline());

        let outcome = service.create(company_input("01310100")).await;

        assert!(outcome.success);
        assert_eq!(outcome.severity, Severity::Warning);
        assert!(outcome.message.contains("providers offline"));
    }

    #[tokio::test]
    async fn test_create_invalid_postal_code_skips_backend() {
        let mut backend = MockBackendGateway::new();
        backend.expect_post().never();

        let service = companies(backend, postal_untouched());

        let outcome = service.create(company_input("123")).await;

        assert!(!outcome.success);
        assert_eq!(outcome.severity, Severity::Error);
        assert_eq!(outcome.message, "Postal code must have exactly 8 digits.");
    }

    #[tokio::test]
    async fn test_create_surfaces_backend_body() {
        let mut backend = MockBackendGateway::new();
        backend
            .expect_post()
            .returning(|_, _| Ok(RawResponse::new(400, "CNPJ already registered.")));

        let service = companies(backend, postal_hit(json!({"uf": "SP"})));

        let outcome = service.create(company_input("01310100")).await;

        assert!(!outcome.success);
        assert_eq!(
            outcome.message,
            "Error creating company: CNPJ already registered."
        );
    }

    #[tokio::test]
    async fn test_create_empty_body_reports_status() {
        let mut backend = MockBackendGateway::new();
        backend
            .expect_post()
            .returning(|_, _| Ok(RawResponse::new(500, "")));

        let service = companies(backend, postal_hit(json!({"uf": "SP"})));

        let outcome = service.create(company_input("01310100")).await;

        assert_eq!(outcome.message, "Error creating company: status 500");
    }

    #[tokio::test]
    async fn test_create_transport_failure() {
        let mut backend = MockBackendGateway::new();
        backend
            .expect_post()
            .returning(|_, _| Err(ProxyError::Transport("connection refused".to_string())));

        let service = companies(backend, postal_hit(json!({"uf": "SP"})));

        let outcome = service.create(company_input("01310100")).await;

        assert!(!outcome.success);
        assert_eq!(
            outcome.message,
            "Error creating company (failed to communicate with the backend)."
        );
    }

    // ─── UPDATE ──────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_update_success_on_204() {
        let mut backend = MockBackendGateway::new();
        backend
            .expect_put()
            .withf(|path, body| path == "empresas/5" && body["estado"] == "SP")
            .times(1)
            .returning(|_, _| Ok(RawResponse::new(204, "")));

        let service = companies(backend, postal_hit(json!({"uf": "SP"})));

        let outcome = service.update(5, company_input("01310100")).await;

        assert!(outcome.success);
        assert_eq!(outcome.message, "Company updated successfully.");
    }

    #[tokio::test]
    async fn test_update_surfaces_backend_body() {
        let mut backend = MockBackendGateway::new();
        backend
            .expect_put()
            .returning(|_, _| Ok(RawResponse::new(400, "State must have 2 letters.")));

        let service = companies(backend, postal_hit(json!({"uf": "SP"})));

        let outcome = service.update(5, company_input("01310100")).await;

        assert!(!outcome.success);
        assert_eq!(
            outcome.message,
            "Error updating company: State must have 2 letters."
        );
    }

    #[tokio::test]
    async fn test_update_missing_record() {
        let mut backend = MockBackendGateway::new();
        backend
            .expect_put()
            .returning(|_, _| Ok(RawResponse::new(404, "")));

        let service = companies(backend, postal_hit(json!({"uf": "SP"})));

        let outcome = service.update(5, company_input("01310100")).await;

        assert_eq!(outcome.message, "Company not found.");
    }

    #[tokio::test]
    async fn test_update_supplier_validates_postal_code() {
        let mut backend = MockBackendGateway::new();
        backend.expect_put().never();

        let service = suppliers(backend);

        let input = SupplierInput {
            name: Some("Maria".to_string()),
            postal_code: Some("abc".to_string()),
            person_type: Some(PersonType::Individual),
            ..Default::default()
        };

        let outcome = service.update(2, input).await;

        assert!(!outcome.success);
    }

    #[tokio::test]
    async fn test_update_submits_canonical_postal_code_when_unverified() {
        let mut backend = MockBackendGateway::new();
        backend
            .expect_put()
            .withf(|path, body| path == "fornecedores/2" && body["cep"] == "01310100")
            .times(1)
            .returning(|_, _| Ok(RawResponse::new(200, "")));

        let service: ResourceService<Supplier> =
            ResourceService::new(Arc::new(backend), postal_offline());

        let input = SupplierInput {
            name: Some("Maria".to_string()),
            postal_code: Some(" 01.310-100 ".to_string()),
            ..Default::default()
        };

        let outcome = service.update(2, input).await;

        assert!(outcome.success);
        assert_eq!(outcome.severity, Severity::Warning);
    }

    // ─── DELETE ──────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_delete_success() {
        let mut backend = MockBackendGateway::new();
        backend
            .expect_delete()
            .withf(|path| path == "fornecedores/8")
            .times(1)
            .returning(|_| Ok(RawResponse::new(204, "")));

        let outcome = suppliers(backend).delete(8).await;

        assert!(outcome.success);
        assert_eq!(outcome.message, "Supplier deleted successfully.");
    }

    #[tokio::test]
    async fn test_delete_not_found() {
        let mut backend = MockBackendGateway::new();
        backend
            .expect_delete()
            .returning(|_| Ok(RawResponse::new(404, "ignored")));

        let outcome = suppliers(backend).delete(8).await;

        assert!(!outcome.success);
        assert_eq!(outcome.message, "Supplier not found.");
    }

    #[tokio::test]
    async fn test_delete_other_status_surfaces_body_or_status() {
        let mut backend = MockBackendGateway::new();
        backend
            .expect_delete()
            .times(1)
            .returning(|_| Ok(RawResponse::new(400, "Supplier has linked companies.")));

        let outcome = suppliers(backend).delete(8).await;
        assert!(outcome.message.contains("Supplier has linked companies."));

        let mut backend = MockBackendGateway::new();
        backend
            .expect_delete()
            .times(1)
            .returning(|_| Ok(RawResponse::new(500, "")));

        let outcome = suppliers(backend).delete(8).await;
        assert!(outcome.message.contains("500"));
    }

    #[tokio::test]
    async fn test_delete_transport_failure() {
        let mut backend = MockBackendGateway::new();
        backend
            .expect_delete()
            .returning(|_| Err(ProxyError::Transport("timed out".to_string())));

        let outcome = suppliers(backend).delete(8).await;

        assert_eq!(
            outcome.message,
            "Error deleting supplier (failed to communicate with the backend)."
        );
    }

    // ─── LIST / FETCH ────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_list_applies_filter() {
        let mut backend = MockBackendGateway::new();
        backend
            .expect_get()
            .withf(|path| path == "fornecedores")
            .times(1)
            .returning(|_| {
                Ok(RawResponse::new(
                    200,
                    json!([
                        {"id": 1, "nome": "Acme Supplies", "cpfCnpj": "11222333000144", "cep": "01310100"},
                        {"id": 2, "nome": "Globex", "cpfCnpj": "55666777000188", "cep": "01310100"}
                    ])
                    .to_string(),
                ))
            });

        let filter = SupplierFilter {
            name: Some("ACME".to_string()),
            tax_id: None,
        };

        let listing = suppliers(backend).list(&filter).await;

        assert!(listing.warning.is_none());
        assert_eq!(listing.items.len(), 1);
        assert_eq!(listing.items[0].id, 1);
    }

    #[tokio::test]
    async fn test_list_backend_unavailable_is_empty_with_warning() {
        let mut backend = MockBackendGateway::new();
        backend
            .expect_get()
            .returning(|_| Err(ProxyError::Transport("connection refused".to_string())));

        let listing = companies(backend, postal_untouched()).list(&()).await;

        assert!(listing.items.is_empty());
        let warning = listing.warning.unwrap();
        assert_eq!(warning.severity, Severity::Warning);
        assert_eq!(warning.message, "Error loading companies.");
    }

    #[tokio::test]
    async fn test_list_error_status_is_empty_with_warning() {
        let mut backend = MockBackendGateway::new();
        backend
            .expect_get()
            .returning(|_| Ok(RawResponse::new(500, "boom")));

        let listing = companies(backend, postal_untouched()).list(&()).await;

        assert!(listing.items.is_empty());
        assert!(listing.warning.is_some());
    }

    #[tokio::test]
    async fn test_fetch_one() {
        let mut backend = MockBackendGateway::new();
        backend
            .expect_get()
            .withf(|path| path == "empresas/3")
            .returning(|_| {
                Ok(RawResponse::new(
                    200,
                    json!({"id": 3, "cnpj": "1", "nomeFantasia": "Acme", "cep": "01310100", "estado": "SP"})
                        .to_string(),
                ))
            });

        let company = companies(backend, postal_untouched()).fetch_one(3).await;

        assert_eq!(company.unwrap().trade_name, "Acme");
    }

    #[tokio::test]
    async fn test_fetch_one_missing_is_none() {
        let mut backend = MockBackendGateway::new();
        backend
            .expect_get()
            .returning(|_| Ok(RawResponse::new(404, "")));

        let company = companies(backend, postal_untouched()).fetch_one(3).await;

        assert!(company.is_none());
    }
}
