//! Company ↔ supplier link page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect},
};

use crate::domain::Listing;
use crate::domain::entities::{LinkRequest, Supplier};
use crate::state::AppState;
use crate::web::dto::{LinkForm, LinksQuery, NoticeQuery};
use crate::web::notice::redirect_with;
use crate::web::views::{self, NoticeView, OptionView, SupplierRow};

const PAGE_PATH: &str = "/vinculos";

/// Link management page.
///
/// Lists every company and supplier for the link form and, once a company
/// is selected, the suppliers already linked to it.
#[derive(Template, WebTemplate)]
#[template(path = "links.html")]
pub struct LinksTemplate {
    pub notices: Vec<NoticeView>,
    pub companies: Vec<OptionView>,
    pub suppliers: Vec<OptionView>,
    pub linked: Vec<SupplierRow>,
    pub selected_company: String,
    pub has_selection: bool,
}

/// Renders the link page.
///
/// # Endpoint
///
/// `GET /vinculos?empresa_id=`
pub async fn links_handler(
    State(state): State<AppState>,
    Query(selection): Query<LinksQuery>,
    Query(query): Query<NoticeQuery>,
) -> impl IntoResponse {
    let selected = selection.empresa_id;

    let companies = state.company_service.list(&()).await;
    let suppliers = state.supplier_service.list(&Default::default()).await;
    let linked: Listing<Supplier> = match selected {
        Some(company_id) => state.association_service.list_for_company(company_id).await,
        None => Listing::default(),
    };

    LinksTemplate {
        notices: views::notices(
            query.into_outcome(),
            &[
                views::warning_of(&companies),
                views::warning_of(&suppliers),
                views::warning_of(&linked),
            ],
        ),
        companies: companies
            .items
            .iter()
            .map(|c| OptionView::company(c, selected))
            .collect(),
        suppliers: suppliers.items.iter().map(OptionView::supplier).collect(),
        linked: linked.items.iter().map(SupplierRow::from).collect(),
        selected_company: selected.map(|id| id.to_string()).unwrap_or_default(),
        has_selection: selected.is_some(),
    }
}

/// Links a supplier to a company.
///
/// # Endpoint
///
/// `POST /vinculos`
pub async fn link_handler(State(state): State<AppState>, Form(form): Form<LinkForm>) -> Redirect {
    let request = form.into_request();
    let outcome = state.association_service.link(request).await;
    redirect_with(&page_for(&request), &outcome)
}

/// Removes a link.
///
/// # Endpoint
///
/// `POST /vinculos/desvincular`
pub async fn unlink_handler(
    State(state): State<AppState>,
    Form(form): Form<LinkForm>,
) -> Redirect {
    let request = form.into_request();
    let outcome = state.association_service.unlink(request).await;
    redirect_with(&page_for(&request), &outcome)
}

/// Link page with the request's company selected, when it has one.
fn page_for(request: &LinkRequest) -> String {
    match request.company_id {
        Some(id) => format!("{PAGE_PATH}?empresa_id={id}"),
        None => PAGE_PATH.to_string(),
    }
}
