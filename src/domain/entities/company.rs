//! Company entity as exchanged with the backend.

use serde::{Deserialize, Serialize};

use crate::domain::entities::PostalAddress;
use crate::domain::resource::{AddressPayload, Resource};

/// A company registered in the backend.
///
/// Wire names follow the backend's JSON contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    #[serde(rename = "cnpj", default)]
    pub tax_id: String,
    #[serde(rename = "nomeFantasia", default)]
    pub trade_name: String,
    #[serde(rename = "cep", default)]
    pub postal_code: String,
    #[serde(rename = "estado", default)]
    pub state: Option<String>,
    #[serde(rename = "cidade", default)]
    pub city: Option<String>,
    #[serde(rename = "bairro", default)]
    pub neighborhood: Option<String>,
}

/// Payload for creating or updating a company.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompanyInput {
    #[serde(rename = "cnpj")]
    pub tax_id: Option<String>,
    #[serde(rename = "nomeFantasia")]
    pub trade_name: Option<String>,
    #[serde(rename = "cep")]
    pub postal_code: Option<String>,
    #[serde(rename = "estado")]
    pub state: Option<String>,
    #[serde(rename = "cidade", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(rename = "bairro", skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
}

impl AddressPayload for CompanyInput {
    fn postal_code(&self) -> &str {
        self.postal_code.as_deref().unwrap_or_default()
    }

    fn set_postal_code(&mut self, code: String) {
        self.postal_code = Some(code);
    }

    fn apply_address(&mut self, address: &PostalAddress) {
        if let Some(state) = &address.state {
            self.state = Some(state.clone());
        }
        if let Some(city) = &address.city {
            self.city = Some(city.clone());
        }
        if let Some(neighborhood) = &address.neighborhood {
            self.neighborhood = Some(neighborhood.clone());
        }
    }

    fn normalize(&mut self) {
        self.state = self.state.as_ref().map(|s| s.to_uppercase());
    }
}

impl Resource for Company {
    type Input = CompanyInput;
    type Filter = ();

    const COLLECTION: &'static str = "empresas";
    const TITLE: &'static str = "Company";
    const SINGULAR: &'static str = "company";
    const PLURAL: &'static str = "companies";

    fn matches(&self, _filter: &()) -> bool {
        true
    }
}
