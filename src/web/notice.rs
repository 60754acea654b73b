//! Status notices passed from a form submission to the page it redirects to.

use axum::response::Redirect;
use url::form_urlencoded;

use crate::domain::Outcome;

/// Redirects (303) to `path`, appending the outcome as `notice` and `level`.
///
/// `path` may already carry a query string.
pub fn redirect_with(path: &str, outcome: &Outcome) -> Redirect {
    Redirect::to(&location(path, outcome))
}

/// Target of [`redirect_with`].
pub fn location(path: &str, outcome: &Outcome) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("notice", &outcome.message)
        .append_pair("level", outcome.severity.as_str())
        .finish();

    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{path}{separator}{query}")
}
