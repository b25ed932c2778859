//! Handlers for the `/pets` resource.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use playbill_core::error::CoreError;
use playbill_core::types::DbId;
use playbill_core::validation::require_name;
use playbill_db::models::owner::Owner;
use playbill_db::models::pet::{CreatePet, Pet, UpdatePet};
use playbill_db::repositories::{OwnerRepo, PetRepo};
use playbill_db::transfer;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::middleware::guard::CurrentUser;
use crate::state::AppState;

/// GET /pets
pub async fn list(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> AppResult<Json<Vec<Value>>> {
    let pets = PetRepo::list(&state.pool).await?;
    let owners = OwnerRepo::list(&state.pool).await?;

    let by_id: HashMap<DbId, Owner> = owners.into_iter().map(|o| (o.id, o)).collect();

    let forms = pets
        .iter()
        .map(|pet| {
            let owner = pet.owner_id.and_then(|id| by_id.get(&id));
            transfer::pet(pet, owner, &[])
        })
        .collect();
    Ok(Json(forms))
}

/// POST /pets
pub async fn create(
    State(state): State<AppState>,
    _user: CurrentUser,
    Json(input): Json<CreatePet>,
) -> AppResult<(StatusCode, Json<Value>)> {
    require_name("Pet", &input.name)?;

    let pet = PetRepo::create(&state.pool, &input).await?;
    let owner = related_owner(&state, &pet).await?;
    Ok((
        StatusCode::CREATED,
        Json(transfer::pet(&pet, owner.as_ref(), &[])),
    ))
}

/// GET /pets/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Value>> {
    let pet = PetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Pet" }))?;

    let owner = related_owner(&state, &pet).await?;
    Ok(Json(transfer::pet(&pet, owner.as_ref(), &[])))
}

/// PATCH /pets/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePet>,
) -> AppResult<Json<Value>> {
    if let Some(name) = &input.name {
        require_name("Pet", name)?;
    }

    let pet = PetRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Pet" }))?;

    let owner = related_owner(&state, &pet).await?;
    Ok(Json(transfer::pet(&pet, owner.as_ref(), &[])))
}

/// DELETE /pets/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Value>> {
    let deleted = PetRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(json!({})))
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Pet" }))
    }
}

/// Fetch the owner row a pet points at, if any. A dangling `owner_id`
/// resolves to `None` and the transfer form simply omits the owner.
async fn related_owner(state: &AppState, pet: &Pet) -> AppResult<Option<Owner>> {
    match pet.owner_id {
        Some(owner_id) => Ok(OwnerRepo::find_by_id(&state.pool, owner_id).await?),
        None => Ok(None),
    }
}
