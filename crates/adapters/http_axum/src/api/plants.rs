//! JSON REST handlers for plants.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Deserializer};

use plantstore_app::ports::PlantRepository;
use plantstore_domain::error::{NotFoundError, PlantStoreError};
use plantstore_domain::id::PlantId;
use plantstore_domain::plant::{NewPlant, Plant, PlantPatch};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a plant.
///
/// Every field may be omitted; a missing `is_in_stock` means in stock.
#[derive(Debug, Deserialize)]
pub struct CreatePlantRequest {
    pub name: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
    pub is_in_stock: Option<bool>,
}

impl From<CreatePlantRequest> for NewPlant {
    fn from(req: CreatePlantRequest) -> Self {
        Self {
            name: req.name,
            image: req.image,
            price: req.price,
            is_in_stock: req.is_in_stock.unwrap_or(true),
        }
    }
}

/// Request body for patching a plant.
///
/// A key that is absent leaves the field untouched, an explicit `null`
/// clears it.
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePlantRequest {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub image: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub price: Option<Option<f64>>,
    pub is_in_stock: Option<bool>,
}

impl From<UpdatePlantRequest> for PlantPatch {
    fn from(req: UpdatePlantRequest) -> Self {
        Self {
            name: req.name,
            image: req.image,
            price: req.price,
            is_in_stock: req.is_in_stock,
        }
    }
}

/// Marks a key as present, keeping `null` as `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Parse a path segment into a [`PlantId`].
///
/// Only a plain run of ASCII digits names a plant; anything else (signs,
/// whitespace, the empty string) is reported as not found.
fn parse_id(raw: &str) -> Result<PlantId, ApiError> {
    let not_found = || ApiError::from(PlantStoreError::from(NotFoundError::plant(raw)));
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_found());
    }
    PlantId::from_str(raw).map_err(|_| not_found())
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Plant>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Plant>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Plant>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /plants`
pub async fn list<PR>(State(state): State<AppState<PR>>) -> Result<ListResponse, ApiError>
where
    PR: PlantRepository + Send + Sync + 'static,
{
    let plants = state.plant_service.list_plants().await?;
    Ok(ListResponse::Ok(Json(plants)))
}

/// `GET /plants/:id`
pub async fn get<PR>(
    State(state): State<AppState<PR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    PR: PlantRepository + Send + Sync + 'static,
{
    let plant_id = parse_id(&id)?;
    let plant = state.plant_service.get_plant(plant_id).await?;
    Ok(GetResponse::Ok(Json(plant)))
}

/// `POST /plants`
pub async fn create<PR>(
    State(state): State<AppState<PR>>,
    Json(req): Json<CreatePlantRequest>,
) -> Result<CreateResponse, ApiError>
where
    PR: PlantRepository + Send + Sync + 'static,
{
    let created = state.plant_service.create_plant(req.into()).await?;
    tracing::info!(plant_id = %created.id, "plant created");
    Ok(CreateResponse::Created(Json(created)))
}

/// `PATCH /plants/:id`
pub async fn update<PR>(
    State(state): State<AppState<PR>>,
    Path(id): Path<String>,
    Json(req): Json<UpdatePlantRequest>,
) -> Result<GetResponse, ApiError>
where
    PR: PlantRepository + Send + Sync + 'static,
{
    let plant_id = parse_id(&id)?;
    let updated = state.plant_service.update_plant(plant_id, req.into()).await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /plants/:id`
pub async fn delete<PR>(
    State(state): State<AppState<PR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    PR: PlantRepository + Send + Sync + 'static,
{
    let plant_id = parse_id(&id)?;
    state.plant_service.delete_plant(plant_id).await?;
    tracing::info!(%plant_id, "plant deleted");
    Ok(DeleteResponse::NoContent)
}
