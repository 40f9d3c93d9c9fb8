//! Static landing page.

use axum::response::Html;

/// `GET /` — greeting shown when the API root is opened in a browser.
pub async fn index() -> Html<&'static str> {
    Html("<h1>Plant Store API</h1>")
}
