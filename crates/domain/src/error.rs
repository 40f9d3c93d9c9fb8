//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`PlantStoreError`] via `From`.

/// Top-level error returned by ports and services.
#[derive(Debug, thiserror::Error)]
pub enum PlantStoreError {
    /// The requested record does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The storage backend failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Kind of record that was looked up (e.g. `"Plant"`).
    pub entity: &'static str,
    /// Identifier that was looked up, as received.
    pub id: String,
}

impl NotFoundError {
    /// Build a not-found error for a plant identifier.
    #[must_use]
    pub fn plant(id: impl ToString) -> Self {
        Self {
            entity: "Plant",
            id: id.to_string(),
        }
    }
}
