//! Flat, display-ready rows consumed by the templates.
//!
//! Templates only print strings and test booleans; every optional value and
//! every formatting decision is settled here.

use crate::domain::entities::{Company, PersonType, Supplier};
use crate::domain::{Listing, Outcome};

/// Status banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeView {
    pub message: String,
    pub level: &'static str,
}

impl From<&Outcome> for NoticeView {
    fn from(outcome: &Outcome) -> Self {
        Self {
            message: outcome.message.clone(),
            level: outcome.severity.as_str(),
        }
    }
}

/// Collects the redirect notice and any listing warnings, in display order.
pub fn notices(notice: Option<Outcome>, warnings: &[Option<&Outcome>]) -> Vec<NoticeView> {
    notice
        .iter()
        .chain(warnings.iter().flatten().copied())
        .map(NoticeView::from)
        .collect()
}

/// Warning attached to a listing, if any.
pub fn warning_of<T>(listing: &Listing<T>) -> Option<&Outcome> {
    listing.warning.as_ref()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyRow {
    pub id: i64,
    pub tax_id: String,
    pub trade_name: String,
    pub postal_code: String,
    pub state: String,
    pub city: String,
    pub neighborhood: String,
}

impl From<&Company> for CompanyRow {
    fn from(company: &Company) -> Self {
        Self {
            id: company.id,
            tax_id: company.tax_id.clone(),
            trade_name: company.trade_name.clone(),
            postal_code: company.postal_code.clone(),
            state: company.state.clone().unwrap_or_default(),
            city: company.city.clone().unwrap_or_default(),
            neighborhood: company.neighborhood.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplierRow {
    pub id: i64,
    pub name: String,
    pub tax_id: String,
    pub email: String,
    pub national_id: String,
    /// `YYYY-MM-DD`, the format date inputs expect.
    pub birth_date: String,
    pub postal_code: String,
    pub state: String,
    pub person_type: String,
    pub is_individual: bool,
    pub is_organization: bool,
}

impl From<&Supplier> for SupplierRow {
    fn from(supplier: &Supplier) -> Self {
        Self {
            id: supplier.id,
            name: supplier.name.clone(),
            tax_id: supplier.tax_id.clone(),
            email: supplier.email.clone().unwrap_or_default(),
            national_id: supplier.national_id.clone().unwrap_or_default(),
            birth_date: supplier
                .birth_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            postal_code: supplier.postal_code.clone(),
            state: supplier.state.clone().unwrap_or_default(),
            person_type: supplier
                .person_type
                .map(|p| p.code().to_string())
                .unwrap_or_default(),
            is_individual: supplier.person_type == Some(PersonType::Individual),
            is_organization: supplier.person_type == Some(PersonType::Organization),
        }
    }
}

/// Entry of a `<select>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub id: i64,
    pub label: String,
    pub selected: bool,
}

impl OptionView {
    pub fn company(company: &Company, selected: Option<i64>) -> Self {
        Self {
            id: company.id,
            label: format!("{} ({})", company.trade_name, company.tax_id),
            selected: selected == Some(company.id),
        }
    }

    pub fn supplier(supplier: &Supplier) -> Self {
        Self {
            id: supplier.id,
            label: format!("{} ({})", supplier.name, supplier.tax_id),
            selected: false,
        }
    }
}
