//! `SQLite` implementation of [`PlantRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, QueryBuilder, Row, Sqlite, SqlitePool};

use plantstore_app::ports::PlantRepository;
use plantstore_domain::error::{NotFoundError, PlantStoreError};
use plantstore_domain::id::PlantId;
use plantstore_domain::plant::{NewPlant, Plant, PlantPatch};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Plant`].
struct Wrapper(Plant);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Plant> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Plant {
            id: PlantId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            image: row.try_get("image")?,
            price: row.try_get("price")?,
            is_in_stock: row.try_get("is_in_stock")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO plants (name, image, price, is_in_stock) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM plants WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM plants ORDER BY id";
const DELETE_BY_ID: &str = "DELETE FROM plants WHERE id = ?";

/// `SQLite`-backed plant repository.
pub struct SqlitePlantRepository {
    pool: SqlitePool,
}

impl SqlitePlantRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PlantRepository for SqlitePlantRepository {
    fn create(
        &self,
        plant: NewPlant,
    ) -> impl Future<Output = Result<Plant, PlantStoreError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&plant.name)
                .bind(&plant.image)
                .bind(plant.price)
                .bind(plant.is_in_stock)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            let id = PlantId::from_i64(result.last_insert_rowid());
            Ok(Plant::from_new(id, plant))
        }
    }

    fn get_by_id(
        &self,
        id: PlantId,
    ) -> impl Future<Output = Result<Option<Plant>, PlantStoreError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Plant>, PlantStoreError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        id: PlantId,
        patch: PlantPatch,
    ) -> impl Future<Output = Result<Plant, PlantStoreError>> + Send {
        let pool = self.pool.clone();
        async move {
            if patch.is_empty() {
                let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                    .bind(id.as_i64())
                    .fetch_optional(&pool)
                    .await
                    .map_err(StorageError::from)?;
                return Wrapper::maybe(row)
                    .ok_or_else(|| PlantStoreError::from(NotFoundError::plant(id)));
            }

            // Only touch the columns the patch names, so concurrent patches
            // to other fields are not overwritten.
            let mut builder = QueryBuilder::<Sqlite>::new("UPDATE plants SET ");
            {
                let mut set = builder.separated(", ");
                if let Some(name) = patch.name {
                    set.push("name = ").push_bind_unseparated(name);
                }
                if let Some(image) = patch.image {
                    set.push("image = ").push_bind_unseparated(image);
                }
                if let Some(price) = patch.price {
                    set.push("price = ").push_bind_unseparated(price);
                }
                if let Some(is_in_stock) = patch.is_in_stock {
                    set.push("is_in_stock = ").push_bind_unseparated(is_in_stock);
                }
            }
            builder
                .push(" WHERE id = ")
                .push_bind(id.as_i64())
                .push(" RETURNING *");

            let row: Option<Wrapper> = builder
                .build_query_as()
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Wrapper::maybe(row).ok_or_else(|| PlantStoreError::from(NotFoundError::plant(id)))
        }
    }

    fn delete(&self, id: PlantId) -> impl Future<Output = Result<(), PlantStoreError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(NotFoundError::plant(id).into());
            }
            Ok(())
        }
    }
}
