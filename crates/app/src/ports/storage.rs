//! Storage port — repository trait for plant persistence.

use std::future::Future;

use plantstore_domain::error::PlantStoreError;
use plantstore_domain::id::PlantId;
use plantstore_domain::plant::{NewPlant, Plant, PlantPatch};

/// Repository for persisting and querying [`Plant`]s.
///
/// Every mutating call must be durable once its future resolves.
pub trait PlantRepository {
    /// Store a new plant, letting the store allocate its id.
    fn create(
        &self,
        plant: NewPlant,
    ) -> impl Future<Output = Result<Plant, PlantStoreError>> + Send;

    /// Get a plant by its identifier.
    fn get_by_id(
        &self,
        id: PlantId,
    ) -> impl Future<Output = Result<Option<Plant>, PlantStoreError>> + Send;

    /// Get all plants, in id order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Plant>, PlantStoreError>> + Send;

    /// Write the fields present in `patch` and return the stored plant.
    ///
    /// Fields absent from the patch are never written, so patches touching
    /// different fields of the same plant do not undo each other.
    /// Resolves to [`PlantStoreError::NotFound`] when no row has `id`.
    fn update(
        &self,
        id: PlantId,
        patch: PlantPatch,
    ) -> impl Future<Output = Result<Plant, PlantStoreError>> + Send;

    /// Permanently remove a plant.
    ///
    /// Resolves to [`PlantStoreError::NotFound`] when no row has `id`.
    fn delete(&self, id: PlantId) -> impl Future<Output = Result<(), PlantStoreError>> + Send;
}
