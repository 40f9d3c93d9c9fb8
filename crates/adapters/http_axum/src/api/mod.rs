//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod plants;

use axum::Router;
use axum::routing::get;

use plantstore_app::ports::PlantRepository;

use crate::state::AppState;

/// Build the plant API sub-router.
pub fn routes<PR>() -> Router<AppState<PR>>
where
    PR: PlantRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/plants",
            get(plants::list::<PR>).post(plants::create::<PR>),
        )
        .route(
            "/plants/{id}",
            get(plants::get::<PR>)
                .patch(plants::update::<PR>)
                .delete(plants::delete::<PR>),
        )
}
