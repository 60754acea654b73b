//! Management page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    create_company_handler, create_supplier_handler, delete_company_handler,
    delete_supplier_handler, edit_company_handler, edit_supplier_handler, link_handler,
    links_handler, list_companies_handler, list_suppliers_handler, unlink_handler,
    update_company_handler, update_supplier_handler,
};
use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

/// Management pages.
///
/// # Endpoints
///
/// - `GET /` - Redirects to the company list
/// - `GET|POST /empresas` - Company list / create
/// - `GET|POST /empresas/{id}/editar` - Company edit form / update
/// - `POST /empresas/{id}/deletar` - Company delete
/// - `GET|POST /fornecedores` - Supplier list (filterable) / create
/// - `GET|POST /fornecedores/{id}/editar` - Supplier edit form / update
/// - `POST /fornecedores/{id}/deletar` - Supplier delete
/// - `GET|POST /vinculos` - Link page / link
/// - `POST /vinculos/desvincular` - Unlink
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::to("/empresas") }))
        .route(
            "/empresas",
            get(list_companies_handler).post(create_company_handler),
        )
        .route(
            "/empresas/{id}/editar",
            get(edit_company_handler).post(update_company_handler),
        )
        .route("/empresas/{id}/deletar", post(delete_company_handler))
        .route(
            "/fornecedores",
            get(list_suppliers_handler).post(create_supplier_handler),
        )
        .route(
            "/fornecedores/{id}/editar",
            get(edit_supplier_handler).post(update_supplier_handler),
        )
        .route("/fornecedores/{id}/deletar", post(delete_supplier_handler))
        .route("/vinculos", get(links_handler).post(link_handler))
        .route("/vinculos/desvincular", post(unlink_handler))
}
