//! Company management page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};

use crate::domain::entities::Company;
use crate::domain::{Outcome, Resource};
use crate::state::AppState;
use crate::web::dto::{CompanyForm, NoticeQuery};
use crate::web::notice::redirect_with;
use crate::web::views::{self, CompanyRow, NoticeView};

const LIST_PATH: &str = "/empresas";

/// Company list with the creation form.
#[derive(Template, WebTemplate)]
#[template(path = "companies.html")]
pub struct CompaniesTemplate {
    pub notices: Vec<NoticeView>,
    pub companies: Vec<CompanyRow>,
}

/// Pre-populated company edit form.
#[derive(Template, WebTemplate)]
#[template(path = "company_form.html")]
pub struct CompanyFormTemplate {
    pub notices: Vec<NoticeView>,
    pub company: CompanyRow,
}

/// Renders the company list.
///
/// # Endpoint
///
/// `GET /empresas`
pub async fn list_companies_handler(
    State(state): State<AppState>,
    Query(query): Query<NoticeQuery>,
) -> impl IntoResponse {
    let listing = state.company_service.list(&()).await;

    CompaniesTemplate {
        notices: views::notices(query.into_outcome(), &[views::warning_of(&listing)]),
        companies: listing.items.iter().map(CompanyRow::from).collect(),
    }
}

/// Creates a company and redirects back to the list.
///
/// # Endpoint
///
/// `POST /empresas`
pub async fn create_company_handler(
    State(state): State<AppState>,
    Form(form): Form<CompanyForm>,
) -> Redirect {
    let outcome = state.company_service.create(form.into_input()).await;
    redirect_with(LIST_PATH, &outcome)
}

/// Renders the edit form, or returns to the list when the company is gone.
///
/// # Endpoint
///
/// `GET /empresas/{id}/editar`
pub async fn edit_company_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<NoticeQuery>,
) -> Response {
    match state.company_service.fetch_one(id).await {
        Some(company) => CompanyFormTemplate {
            notices: views::notices(query.into_outcome(), &[]),
            company: CompanyRow::from(&company),
        }
        .into_response(),
        None => redirect_with(
            LIST_PATH,
            &Outcome::error(format!("{} not found.", Company::TITLE)),
        )
        .into_response(),
    }
}

/// Updates a company.
///
/// Success returns to the list; failure returns to the edit form.
///
/// # Endpoint
///
/// `POST /empresas/{id}/editar`
pub async fn update_company_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<CompanyForm>,
) -> Redirect {
    let outcome = state.company_service.update(id, form.into_input()).await;

    if outcome.success {
        redirect_with(LIST_PATH, &outcome)
    } else {
        redirect_with(&format!("{LIST_PATH}/{id}/editar"), &outcome)
    }
}

/// Deletes a company.
///
/// # Endpoint
///
/// `POST /empresas/{id}/deletar`
pub async fn delete_company_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Redirect {
    let outcome = state.company_service.delete(id).await;
    redirect_with(LIST_PATH, &outcome)
}
