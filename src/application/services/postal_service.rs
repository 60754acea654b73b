//! Postal code resolution with a two-provider fallback chain.

use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::entities::{PostalAddress, PostalLookupResult};
use crate::domain::gateways::PostalProvider;
use crate::utils::postal_code::normalize_postal_code;

pub const MSG_NOT_FOUND: &str = "Invalid postal code.";
pub const MSG_FALLBACK: &str = "Postal code validated via fallback provider.";
pub const MSG_UNVERIFIED: &str = "Could not validate postal code (providers offline).";
pub const MSG_LOOKUP_FAILED: &str = "Error validating postal code (providers offline).";

/// Resolves postal codes against a primary and a fallback provider.
///
/// Only a malformed code, or one the fallback provider explicitly reports as
/// unknown, is rejected. When neither provider can answer the code is
/// accepted with an advisory message so the user's submission goes through.
pub struct PostalService {
    primary: Arc<dyn PostalProvider>,
    fallback: Arc<dyn PostalProvider>,
}

impl PostalService {
    /// Creates a new postal service.
    pub fn new(primary: Arc<dyn PostalProvider>, fallback: Arc<dyn PostalProvider>) -> Self {
        Self { primary, fallback }
    }

    /// Normalizes and resolves a raw postal code.
    ///
    /// # Resolution Order
    ///
    /// 1. Shape check: 8 digits after removing whitespace, dots and hyphens
    /// 2. Primary provider: a 200 with a non-empty JSON body wins
    /// 3. Fallback provider: `{"erro": true}` rejects, any other 200 accepts
    ///    with an advisory, everything else accepts without detail
    pub async fn resolve(&self, raw: &str) -> PostalLookupResult {
        let code = match normalize_postal_code(raw) {
            Ok(code) => code,
            Err(e) => {
                return PostalLookupResult::Invalid {
                    reason: e.to_string(),
                };
            }
        };

        if let Some(address) = self.lookup_primary(&code).await {
            return PostalLookupResult::Valid {
                address,
                advisory: None,
            };
        }

        self.lookup_fallback(&code).await
    }

    /// Any failure here falls through to the fallback provider.
    async fn lookup_primary(&self, code: &str) -> Option<PostalAddress> {
        let response = match self.primary.lookup(code).await {
            Ok(response) => response,
            Err(e) => {
                debug!(error = %e, code, "Primary postal provider unreachable");
                return None;
            }
        };

        if response.status != 200 {
            debug!(status = response.status, code, "Primary postal provider miss");
            return None;
        }

        match serde_json::from_str::<Value>(&response.body) {
            Ok(body) if is_present(&body) => Some(address_from(&body, "uf", "cidade", "bairro")),
            Ok(_) => {
                debug!(code, "Primary postal provider returned an empty body");
                None
            }
            Err(e) => {
                debug!(error = %e, code, "Primary postal provider returned malformed JSON");
                None
            }
        }
    }

    async fn lookup_fallback(&self, code: &str) -> PostalLookupResult {
        let response = match self.fallback.lookup(code).await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, code, "Postal providers unreachable");
                return PostalLookupResult::Unknown {
                    reason: MSG_LOOKUP_FAILED.to_string(),
                };
            }
        };

        if response.status != 200 {
            warn!(status = response.status, code, "Fallback postal provider unavailable");
            return PostalLookupResult::Unknown {
                reason: MSG_UNVERIFIED.to_string(),
            };
        }

        let body = match serde_json::from_str::<Value>(&response.body) {
            Ok(body) if body.is_object() => body,
            Ok(_) => {
                warn!(code, "Fallback postal provider returned a non-object body");
                return PostalLookupResult::Unknown {
                    reason: MSG_LOOKUP_FAILED.to_string(),
                };
            }
            Err(e) => {
                warn!(error = %e, code, "Fallback postal provider returned malformed JSON");
                return PostalLookupResult::Unknown {
                    reason: MSG_LOOKUP_FAILED.to_string(),
                };
            }
        };

        if body.get("erro").is_some_and(is_truthy) {
            return PostalLookupResult::Invalid {
                reason: MSG_NOT_FOUND.to_string(),
            };
        }

        PostalLookupResult::Valid {
            address: address_from(&body, "uf", "localidade", "bairro"),
            advisory: Some(MSG_FALLBACK.to_string()),
        }
    }
}

/// Extracts the address fields under the provider-specific keys.
fn address_from(body: &Value, state: &str, city: &str, neighborhood: &str) -> PostalAddress {
    let field = |key: &str| {
        body.get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
    };

    PostalAddress {
        state: field(state),
        city: field(city),
        neighborhood: field(neighborhood),
    }
}

/// Non-empty JSON: anything but `null`, `false`, `0`, `""`, `[]` and `{}`.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Flag semantics: providers send either `true` or `"true"`.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::String(s) => s.eq_ignore_ascii_case("true"),
        other => is_present(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::{MockPostalProvider, RawResponse};
    use crate::error::ProxyError;
    use serde_json::json;

    fn service(primary: MockPostalProvider, fallback: MockPostalProvider) -> PostalService {
        PostalService::new(Arc::new(primary), Arc::new(fallback))
    }

    fn unreachable() -> MockPostalProvider {
        let mut provider = MockPostalProvider::new();
        provider
            .expect_lookup()
            .times(1)
            .returning(|_| Err(ProxyError::Transport("connection refused".to_string())));
        provider
    }

    fn responding(status: u16, body: Value) -> MockPostalProvider {
        let mut provider = MockPostalProvider::new();
        provider
            .expect_lookup()
            .times(1)
            .returning(move |_| Ok(RawResponse::new(status, body.to_string())));
        provider
    }

    fn never_called() -> MockPostalProvider {
        let mut provider = MockPostalProvider::new();
        provider.expect_lookup().never();
        provider
    }

    #[tokio::test]
    async fn test_malformed_code_rejected_without_lookup() {
        let service = service(never_called(), never_called());

        for raw in ["", "1234567", "123456789", "0131O100", "01310/100"] {
            let result = service.resolve(raw).await;
            assert!(!result.is_accepted(), "{raw:?} should be rejected");
            assert_eq!(
                result.message(),
                Some("Postal code must have exactly 8 digits.")
            );
        }
    }

    #[tokio::test]
    async fn test_primary_hit_skips_fallback() {
        let mut primary = MockPostalProvider::new();
        primary
            .expect_lookup()
            .withf(|code| code == "01310100")
            .times(1)
            .returning(|_| {
                Ok(RawResponse::new(
                    200,
                    json!({"uf": "SP", "cidade": "São Paulo", "bairro": "Bela Vista"}).to_string(),
                ))
            });

        let service = service(primary, never_called());

        let result = service.resolve("01310-100").await;

        assert_eq!(
            result,
            PostalLookupResult::Valid {
                address: PostalAddress {
                    state: Some("SP".to_string()),
                    city: Some("São Paulo".to_string()),
                    neighborhood: Some("Bela Vista".to_string()),
                },
                advisory: None,
            }
        );
    }

    #[tokio::test]
    async fn test_primary_partial_fields_pass_through() {
        let service = service(responding(200, json!({"uf": "SP"})), never_called());

        let result = service.resolve("01310100").await;

        let address = result.address().unwrap();
        assert_eq!(address.state.as_deref(), Some("SP"));
        assert!(address.city.is_none());
        assert!(address.neighborhood.is_none());
        assert!(result.message().is_none());
    }

    #[tokio::test]
    async fn test_primary_empty_body_falls_through() {
        let service = service(
            responding(200, json!({})),
            responding(200, json!({"uf": "RJ", "localidade": "Rio de Janeiro"})),
        );

        let result = service.resolve("20040002").await;

        assert!(result.is_accepted());
        assert_eq!(result.message(), Some(MSG_FALLBACK));
        assert_eq!(result.address().unwrap().state.as_deref(), Some("RJ"));
        assert_eq!(
            result.address().unwrap().city.as_deref(),
            Some("Rio de Janeiro")
        );
    }

    #[tokio::test]
    async fn test_primary_error_status_falls_through() {
        let service = service(
            responding(500, json!({"uf": "SP"})),
            responding(200, json!({"uf": "MG"})),
        );

        let result = service.resolve("30140071").await;

        assert_eq!(result.address().unwrap().state.as_deref(), Some("MG"));
    }

    #[tokio::test]
    async fn test_fallback_not_found_flag_rejects() {
        let service = service(unreachable(), responding(200, json!({"erro": true})));

        let result = service.resolve("99999999").await;

        assert_eq!(
            result,
            PostalLookupResult::Invalid {
                reason: MSG_NOT_FOUND.to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_fallback_string_flag_rejects() {
        let service = service(unreachable(), responding(200, json!({"erro": "true"})));

        let result = service.resolve("99999999").await;

        assert!(!result.is_accepted());
    }

    #[tokio::test]
    async fn test_fallback_non_200_is_soft_pass() {
        let service = service(unreachable(), responding(503, json!({})));

        let result = service.resolve("01310100").await;

        assert!(result.is_accepted());
        assert_eq!(result.message(), Some(MSG_UNVERIFIED));
        assert!(result.address().is_none());
    }

    #[tokio::test]
    async fn test_both_unreachable_is_soft_pass() {
        let service = service(unreachable(), unreachable());

        let result = service.resolve("01310100").await;

        assert!(result.is_accepted());
        assert_eq!(result.message(), Some(MSG_LOOKUP_FAILED));
        assert!(result.address().is_none());
    }

    #[tokio::test]
    async fn test_fallback_malformed_json_is_soft_pass() {
        let mut fallback = MockPostalProvider::new();
        fallback
            .expect_lookup()
            .times(1)
            .returning(|_| Ok(RawResponse::new(200, "<html>oops</html>")));

        let service = service(unreachable(), fallback);

        let result = service.resolve("01310100").await;

        assert!(result.is_accepted());
        assert_eq!(result.message(), Some(MSG_LOOKUP_FAILED));
    }

    #[tokio::test]
    async fn test_fallback_non_object_body_is_soft_pass() {
        for body in [Value::Null, json!([]), json!("x"), json!(42)] {
            let service = service(unreachable(), responding(200, body));

            let result = service.resolve("01310100").await;

            assert!(result.is_accepted());
            assert_eq!(result.message(), Some(MSG_LOOKUP_FAILED));
            assert!(result.address().is_none());
        }
    }

    #[test]
    fn test_blank_fields_are_absent() {
        let address = address_from(
            &json!({"uf": "SP", "localidade": "", "bairro": "  "}),
            "uf",
            "localidade",
            "bairro",
        );
        assert_eq!(address.state.as_deref(), Some("SP"));
        assert!(address.city.is_none());
        assert!(address.neighborhood.is_none());
    }

    #[test]
    fn test_is_present() {
        assert!(!is_present(&Value::Null));
        assert!(!is_present(&json!({})));
        assert!(!is_present(&json!([])));
        assert!(!is_present(&json!("")));
        assert!(is_present(&json!({"uf": null})));
    }
}
