//! Supplier management page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};

use crate::domain::entities::Supplier;
use crate::domain::{Outcome, Resource};
use crate::state::AppState;
use crate::web::dto::{NoticeQuery, SupplierFilterQuery, SupplierForm};
use crate::web::notice::redirect_with;
use crate::web::views::{self, NoticeView, SupplierRow};

const LIST_PATH: &str = "/fornecedores";

/// Filtered supplier list with the creation form.
#[derive(Template, WebTemplate)]
#[template(path = "suppliers.html")]
pub struct SuppliersTemplate {
    pub notices: Vec<NoticeView>,
    pub suppliers: Vec<SupplierRow>,
    pub filter_name: String,
    pub filter_tax_id: String,
}

/// Pre-populated supplier edit form.
#[derive(Template, WebTemplate)]
#[template(path = "supplier_form.html")]
pub struct SupplierFormTemplate {
    pub notices: Vec<NoticeView>,
    pub supplier: SupplierRow,
}

/// Renders the supplier list, filtered by name and CPF/CNPJ.
///
/// # Endpoint
///
/// `GET /fornecedores?nome=&cpfCnpj=`
pub async fn list_suppliers_handler(
    State(state): State<AppState>,
    Query(filter): Query<SupplierFilterQuery>,
    Query(query): Query<NoticeQuery>,
) -> impl IntoResponse {
    let criteria = filter.to_filter();
    let listing = state.supplier_service.list(&criteria).await;

    SuppliersTemplate {
        notices: views::notices(query.into_outcome(), &[views::warning_of(&listing)]),
        suppliers: listing.items.iter().map(SupplierRow::from).collect(),
        filter_name: criteria.name.unwrap_or_default(),
        filter_tax_id: criteria.tax_id.unwrap_or_default(),
    }
}

/// Creates a supplier and redirects back to the list.
///
/// # Endpoint
///
/// `POST /fornecedores`
pub async fn create_supplier_handler(
    State(state): State<AppState>,
    Form(form): Form<SupplierForm>,
) -> Redirect {
    let outcome = match form.into_input() {
        Ok(input) => state.supplier_service.create(input).await,
        Err(e) => Outcome::error(e.to_string()),
    };
    redirect_with(LIST_PATH, &outcome)
}

/// Renders the edit form, or returns to the list when the supplier is gone.
///
/// # Endpoint
///
/// `GET /fornecedores/{id}/editar`
pub async fn edit_supplier_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<NoticeQuery>,
) -> Response {
    match state.supplier_service.fetch_one(id).await {
        Some(supplier) => SupplierFormTemplate {
            notices: views::notices(query.into_outcome(), &[]),
            supplier: SupplierRow::from(&supplier),
        }
        .into_response(),
        None => redirect_with(
            LIST_PATH,
            &Outcome::error(format!("{} not found.", Supplier::TITLE)),
        )
        .into_response(),
    }
}

/// Updates a supplier.
///
/// Success returns to the list; failure returns to the edit form.
///
/// # Endpoint
///
/// `POST /fornecedores/{id}/editar`
pub async fn update_supplier_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<SupplierForm>,
) -> Redirect {
    let outcome = match form.into_input() {
        Ok(input) => state.supplier_service.update(id, input).await,
        Err(e) => Outcome::error(e.to_string()),
    };

    if outcome.success {
        redirect_with(LIST_PATH, &outcome)
    } else {
        redirect_with(&format!("{LIST_PATH}/{id}/editar"), &outcome)
    }
}

/// Deletes a supplier.
///
/// # Endpoint
///
/// `POST /fornecedores/{id}/deletar`
pub async fn delete_supplier_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Redirect {
    let outcome = state.supplier_service.delete(id).await;
    redirect_with(LIST_PATH, &outcome)
}
