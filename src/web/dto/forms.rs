//! Form bodies submitted by the management pages.
//!
//! Every field is optional at the wire level; blank values are treated as
//! absent before anything reaches the services.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::entities::{CompanyInput, LinkRequest, PersonType, SupplierInput};
use crate::error::ProxyError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Trims the value and drops it when nothing is left.
fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Company create/update form.
#[derive(Debug, Default, Deserialize)]
pub struct CompanyForm {
    #[serde(default)]
    pub cnpj: Option<String>,
    #[serde(rename = "nomeFantasia", default)]
    pub nome_fantasia: Option<String>,
    #[serde(default)]
    pub cep: Option<String>,
    #[serde(default)]
    pub estado: Option<String>,
    #[serde(default)]
    pub cidade: Option<String>,
    #[serde(default)]
    pub bairro: Option<String>,
}

impl CompanyForm {
    pub fn into_input(self) -> CompanyInput {
        CompanyInput {
            tax_id: present(self.cnpj),
            trade_name: present(self.nome_fantasia),
            postal_code: present(self.cep),
            state: present(self.estado),
            city: present(self.cidade),
            neighborhood: present(self.bairro),
        }
    }
}

/// Supplier create/update form.
#[derive(Debug, Default, Deserialize)]
pub struct SupplierForm {
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(rename = "cpfCnpj", default)]
    pub cpf_cnpj: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub rg: Option<String>,
    #[serde(rename = "dataNascimento", default)]
    pub data_nascimento: Option<String>,
    #[serde(default)]
    pub cep: Option<String>,
    #[serde(default)]
    pub estado: Option<String>,
    #[serde(rename = "tipoPessoa", default)]
    pub tipo_pessoa: Option<String>,
}

impl SupplierForm {
    /// Converts the form into a backend payload.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::Validation`] when the birth date is not
    /// `YYYY-MM-DD` or the person type is neither `PF` nor `PJ`.
    pub fn into_input(self) -> Result<SupplierInput, ProxyError> {
        let birth_date = present(self.data_nascimento)
            .map(|raw| {
                NaiveDate::parse_from_str(&raw, DATE_FORMAT).map_err(|_| {
                    ProxyError::validation(format!(
                        "Birth date must be a valid date (YYYY-MM-DD), got '{raw}'."
                    ))
                })
            })
            .transpose()?;

        let person_type = present(self.tipo_pessoa)
            .map(|raw| raw.parse::<PersonType>().map_err(ProxyError::Validation))
            .transpose()?;

        Ok(SupplierInput {
            name: present(self.nome),
            tax_id: present(self.cpf_cnpj),
            email: present(self.email),
            national_id: present(self.rg),
            birth_date,
            postal_code: present(self.cep),
            state: present(self.estado),
            person_type,
        })
    }
}

/// Link/unlink form.
///
/// Ids are kept as text so that a blank or garbled selection reaches the
/// association service as a missing id instead of a rejected request.
#[derive(Debug, Default, Deserialize)]
pub struct LinkForm {
    #[serde(default)]
    pub empresa_id: Option<String>,
    #[serde(default)]
    pub fornecedor_id: Option<String>,
}

impl LinkForm {
    pub fn into_request(self) -> LinkRequest {
        LinkRequest {
            company_id: parse_id(self.empresa_id),
            supplier_id: parse_id(self.fornecedor_id),
        }
    }
}

fn parse_id(value: Option<String>) -> Option<i64> {
    present(value).and_then(|v| v.parse().ok())
}
