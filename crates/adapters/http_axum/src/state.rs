//! Shared application state for axum handlers.

use std::sync::Arc;

use plantstore_app::ports::PlantRepository;
use plantstore_app::services::plant_service::PlantService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not
/// need to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<PR> {
    /// Plant CRUD service.
    pub plant_service: Arc<PlantService<PR>>,
}

impl<PR> Clone for AppState<PR> {
    fn clone(&self) -> Self {
        Self {
            plant_service: Arc::clone(&self.plant_service),
        }
    }
}

impl<PR> AppState<PR>
where
    PR: PlantRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(plant_service: PlantService<PR>) -> Self {
        Self::from_arc(Arc::new(plant_service))
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    pub fn from_arc(plant_service: Arc<PlantService<PR>>) -> Self {
        Self { plant_service }
    }
}
