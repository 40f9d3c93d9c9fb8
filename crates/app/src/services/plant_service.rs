//! Plant service — use-cases for managing plants.

use plantstore_domain::error::{NotFoundError, PlantStoreError};
use plantstore_domain::id::PlantId;
use plantstore_domain::plant::{NewPlant, Plant, PlantPatch};

use crate::ports::PlantRepository;

/// Application service for plant CRUD operations.
pub struct PlantService<R> {
    repo: R,
}

impl<R: PlantRepository> PlantService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all plants.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_plants(&self) -> Result<Vec<Plant>, PlantStoreError> {
        self.repo.get_all().await
    }

    /// Look up a plant by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`PlantStoreError::NotFound`] when no plant with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_plant(&self, id: PlantId) -> Result<Plant, PlantStoreError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::plant(id).into())
    }

    /// Store a new plant and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn create_plant(&self, plant: NewPlant) -> Result<Plant, PlantStoreError> {
        let created = self.repo.create(plant).await?;
        tracing::debug!(plant_id = %created.id, "plant created");
        Ok(created)
    }

    /// Apply a partial update to an existing plant.
    ///
    /// Only the fields present in `patch` are written; an empty patch is a
    /// plain lookup.
    ///
    /// # Errors
    ///
    /// Returns [`PlantStoreError::NotFound`] when no plant with `id` exists,
    /// or a storage error from the repository.
    pub async fn update_plant(
        &self,
        id: PlantId,
        patch: PlantPatch,
    ) -> Result<Plant, PlantStoreError> {
        if patch.is_empty() {
            return self.get_plant(id).await;
        }
        self.repo.update(id, patch).await
    }

    /// Delete a plant by id.
    ///
    /// # Errors
    ///
    /// Returns [`PlantStoreError::NotFound`] when no plant with `id` exists,
    /// or a storage error from the repository.
    pub async fn delete_plant(&self, id: PlantId) -> Result<(), PlantStoreError> {
        self.repo.delete(id).await?;
        tracing::debug!(plant_id = %id, "plant deleted");
        Ok(())
    }
}
