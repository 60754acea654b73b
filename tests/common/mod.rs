#![allow(dead_code)]

use axum::{Router, routing::get};
use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use supplier_portal::infrastructure::http::{HttpBackendClient, HttpPostalProvider};
use supplier_portal::state::AppState;
use supplier_portal::web::handlers::health_handler;
use supplier_portal::web::routes::page_routes;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Backend and postal providers stood up as wiremock servers.
pub struct Upstreams {
    pub backend: MockServer,
    pub primary: MockServer,
    pub fallback: MockServer,
}

impl Upstreams {
    pub async fn start() -> Self {
        Self {
            backend: MockServer::start().await,
            primary: MockServer::start().await,
            fallback: MockServer::start().await,
        }
    }

    pub fn state(&self) -> AppState {
        let timeout = Duration::from_secs(2);
        let backend =
            HttpBackendClient::new(Url::parse(&self.backend.uri()).unwrap(), timeout).unwrap();
        let primary =
            HttpPostalProvider::new(format!("{}/{{code}}", self.primary.uri()), timeout).unwrap();
        let fallback =
            HttpPostalProvider::new(format!("{}/ws/{{code}}/json/", self.fallback.uri()), timeout)
                .unwrap();

        AppState::new(Arc::new(backend), Arc::new(primary), Arc::new(fallback))
    }

    /// Test server over the page routes and the health endpoint.
    pub fn server(&self) -> TestServer {
        let app = Router::new()
            .route("/health", get(health_handler))
            .merge(page_routes())
            .with_state(self.state());
        TestServer::new(app).unwrap()
    }

    /// Primary provider answers `code` with the given address.
    pub async fn primary_knows(&self, code: &str, address: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/{code}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(address))
            .mount(&self.primary)
            .await;
    }

    /// Fallback provider reports `code` as unknown.
    pub async fn fallback_rejects(&self, code: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/ws/{code}/json/")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "erro": true })))
            .mount(&self.fallback)
            .await;
    }
}

pub fn company_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "cnpj": format!("{id:014}"),
        "nomeFantasia": name,
        "cep": "01310100",
        "estado": "SP",
        "cidade": "São Paulo",
        "bairro": "Bela Vista"
    })
}

pub fn supplier_json(id: i64, name: &str, tax_id: &str) -> Value {
    json!({
        "id": id,
        "nome": name,
        "cpfCnpj": tax_id,
        "email": format!("{}@example.com", name.to_lowercase()),
        "rg": null,
        "dataNascimento": "1990-04-21",
        "cep": "01310100",
        "estado": "SP",
        "tipoPessoa": "PF"
    })
}

/// Location header of a redirect response.
pub fn location(response: &axum_test::TestResponse) -> String {
    response
        .header("location")
        .to_str()
        .unwrap()
        .to_string()
}
