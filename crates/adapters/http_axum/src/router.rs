//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use plantstore_app::ports::PlantRepository;

use crate::state::AppState;

/// Knobs applied to the router as a whole.
#[derive(Debug, Clone)]
pub struct Options {
    /// Answer CORS preflights and allow any origin, method, and header.
    pub permissive_cors: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            permissive_cors: true,
        }
    }
}

/// Build the top-level axum [`Router`].
///
/// Merges the plant API with the landing page and health check.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<PR>(state: AppState<PR>, options: &Options) -> Router
where
    PR: PlantRepository + Send + Sync + 'static,
{
    let router = Router::new()
        .route("/", get(crate::home::index))
        .route("/health", get(health_check))
        .merge(crate::api::routes::<PR>());

    let router = if options.permissive_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
