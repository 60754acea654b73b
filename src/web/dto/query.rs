//! Query string parameters accepted by the management pages.

use serde::Deserialize;
use serde_with::{DefaultOnError, NoneAsEmptyString, serde_as};

use crate::domain::entities::SupplierFilter;
use crate::domain::{Outcome, Severity};

/// Status notice carried across a redirect.
///
/// Written by [`crate::web::notice::redirect_with`], read once by the
/// target page. An unrecognized level reads as missing.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct NoticeQuery {
    #[serde(default)]
    pub notice: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub level: Option<Severity>,
}

impl NoticeQuery {
    /// The notice as an outcome; a missing level reads as an error.
    pub fn into_outcome(self) -> Option<Outcome> {
        let message = self.notice.filter(|m| !m.trim().is_empty())?;
        Some(match self.level.unwrap_or(Severity::Error) {
            Severity::Ok => Outcome::ok(message),
            Severity::Warning => Outcome::warning(message),
            Severity::Error => Outcome::error(message),
        })
    }
}

/// Supplier listing filters.
#[derive(Debug, Default, Deserialize)]
pub struct SupplierFilterQuery {
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(rename = "cpfCnpj", default)]
    pub cpf_cnpj: Option<String>,
}

impl SupplierFilterQuery {
    pub fn to_filter(&self) -> SupplierFilter {
        let criterion = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_owned)
        };

        SupplierFilter {
            name: criterion(&self.nome),
            tax_id: criterion(&self.cpf_cnpj),
        }
    }
}

/// Selected company on the links page; a blank or non-numeric id is no
/// selection.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct LinksQuery {
    #[serde_as(as = "DefaultOnError<NoneAsEmptyString>")]
    #[serde(default)]
    pub empresa_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_notice_defaults_to_error_level() {
        let query = NoticeQuery {
            notice: Some("Company not found.".to_string()),
            level: None,
        };
        let outcome = query.into_outcome().unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.severity, Severity::Error);
    }

    #[test]
    fn test_blank_notice_is_ignored() {
        let query = NoticeQuery {
            notice: Some("  ".to_string()),
            level: Some(Severity::Ok),
        };
        assert!(query.into_outcome().is_none());
    }

    #[test]
    fn test_unknown_level_reads_as_error() {
        let query: NoticeQuery =
            serde_json::from_value(json!({"notice": "Saved.", "level": "bogus"})).unwrap();
        assert_eq!(query.level, None);
        assert_eq!(query.into_outcome().unwrap().severity, Severity::Error);

        let query: NoticeQuery =
            serde_json::from_value(json!({"notice": "Saved.", "level": "warning"})).unwrap();
        assert_eq!(query.level, Some(Severity::Warning));
    }

    #[test]
    fn test_links_query_selection() {
        let parse = |value: &str| {
            serde_json::from_value::<LinksQuery>(json!({ "empresa_id": value }))
                .unwrap()
                .empresa_id
        };
        assert_eq!(parse("3"), Some(3));
        assert_eq!(parse(""), None);
        assert_eq!(parse("abc"), None);
        assert_eq!(parse("2x"), None);

        let query: LinksQuery = serde_json::from_value(json!({})).unwrap();
        assert_eq!(query.empresa_id, None);
    }

    #[test]
    fn test_supplier_filter_ignores_blank_criteria() {
        let query = SupplierFilterQuery {
            nome: Some(" ana ".to_string()),
            cpf_cnpj: Some(String::new()),
        };
        let filter = query.to_filter();
        assert_eq!(filter.name.as_deref(), Some("ana"));
        assert_eq!(filter.tax_id, None);
    }
}
