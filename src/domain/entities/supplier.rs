//! Supplier entity as exchanged with the backend.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::entities::PostalAddress;
use crate::domain::resource::{AddressPayload, Resource, contains_ignore_case};

/// Legal nature of a supplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersonType {
    /// Individual (pessoa física).
    #[serde(rename = "PF")]
    Individual,
    /// Organization (pessoa jurídica).
    #[serde(rename = "PJ")]
    Organization,
}

impl PersonType {
    pub fn code(self) -> &'static str {
        match self {
            Self::Individual => "PF",
            Self::Organization => "PJ",
        }
    }
}

impl fmt::Display for PersonType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PersonType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PF" => Ok(Self::Individual),
            "PJ" => Ok(Self::Organization),
            other => Err(format!("Person type must be PF or PJ, got '{other}'.")),
        }
    }
}

/// A supplier registered in the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: i64,
    #[serde(rename = "nome", default)]
    pub name: String,
    #[serde(rename = "cpfCnpj", default)]
    pub tax_id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "rg", default)]
    pub national_id: Option<String>,
    #[serde(rename = "dataNascimento", default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "cep", default)]
    pub postal_code: String,
    #[serde(rename = "estado", default)]
    pub state: Option<String>,
    #[serde(rename = "tipoPessoa", default)]
    pub person_type: Option<PersonType>,
}

/// Payload for creating or updating a supplier.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SupplierInput {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "cpfCnpj")]
    pub tax_id: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "rg")]
    pub national_id: Option<String>,
    #[serde(rename = "dataNascimento")]
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "cep")]
    pub postal_code: Option<String>,
    #[serde(rename = "estado", skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(rename = "tipoPessoa")]
    pub person_type: Option<PersonType>,
}

impl AddressPayload for SupplierInput {
    fn postal_code(&self) -> &str {
        self.postal_code.as_deref().unwrap_or_default()
    }

    fn set_postal_code(&mut self, code: String) {
        self.postal_code = Some(code);
    }

    // Suppliers only carry the state; city and neighborhood have no field.
    fn apply_address(&mut self, address: &PostalAddress) {
        if let Some(state) = &address.state {
            self.state = Some(state.clone());
        }
    }
}

/// Listing filter for suppliers.
///
/// Both criteria are case-insensitive substrings; empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplierFilter {
    pub name: Option<String>,
    pub tax_id: Option<String>,
}

impl Resource for Supplier {
    type Input = SupplierInput;
    type Filter = SupplierFilter;

    const COLLECTION: &'static str = "fornecedores";
    const TITLE: &'static str = "Supplier";
    const SINGULAR: &'static str = "supplier";
    const PLURAL: &'static str = "suppliers";

    fn matches(&self, filter: &SupplierFilter) -> bool {
        contains_ignore_case(&self.name, filter.name.as_deref().unwrap_or_default())
            && contains_ignore_case(&self.tax_id, filter.tax_id.as_deref().unwrap_or_default())
    }
}
