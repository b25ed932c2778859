//! Handlers for the `/owners` resource.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use playbill_core::error::CoreError;
use playbill_core::types::DbId;
use playbill_core::validation::require_name;
use playbill_db::models::owner::{CreateOwner, UpdateOwner};
use playbill_db::models::pet::Pet;
use playbill_db::repositories::{OwnerRepo, PetRepo};
use playbill_db::transfer;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::middleware::guard::CurrentUser;
use crate::state::AppState;

/// GET /owners
pub async fn list(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> AppResult<Json<Vec<Value>>> {
    let owners = OwnerRepo::list(&state.pool).await?;
    let pets = PetRepo::list(&state.pool).await?;

    // Group pets by owner once instead of querying per owner.
    let mut by_owner: HashMap<DbId, Vec<Pet>> = HashMap::new();
    for pet in pets {
        if let Some(owner_id) = pet.owner_id {
            by_owner.entry(owner_id).or_default().push(pet);
        }
    }

    let empty = Vec::new();
    let forms = owners
        .iter()
        .map(|owner| transfer::owner(owner, by_owner.get(&owner.id).unwrap_or(&empty), &[]))
        .collect();
    Ok(Json(forms))
}

/// POST /owners
pub async fn create(
    State(state): State<AppState>,
    _user: CurrentUser,
    Json(input): Json<CreateOwner>,
) -> AppResult<(StatusCode, Json<Value>)> {
    require_name("Owner", &input.name)?;

    let owner = OwnerRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(transfer::owner(&owner, &[], &[]))))
}

/// GET /owners/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Value>> {
    let owner = OwnerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Owner" }))?;

    let pets = PetRepo::list_by_owner(&state.pool, id).await?;
    Ok(Json(transfer::owner(&owner, &pets, &[])))
}

/// PATCH /owners/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOwner>,
) -> AppResult<Json<Value>> {
    if let Some(name) = &input.name {
        require_name("Owner", name)?;
    }

    let owner = OwnerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Owner" }))?;

    let pets = PetRepo::list_by_owner(&state.pool, id).await?;
    Ok(Json(transfer::owner(&owner, &pets, &[])))
}

/// DELETE /owners/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Value>> {
    let deleted = OwnerRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(json!({})))
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Owner" }))
    }
}
