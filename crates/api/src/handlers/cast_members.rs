//! Handlers for the `/cast_members` resource.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use playbill_core::error::CoreError;
use playbill_core::types::DbId;
use playbill_db::models::cast_member::{CastMember, CreateCastMember, UpdateCastMember};
use playbill_db::models::production::Production;
use playbill_db::repositories::{CastMemberRepo, ProductionRepo};
use playbill_db::transfer;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::middleware::guard::CurrentUser;
use crate::state::AppState;

/// GET /cast_members
pub async fn list(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> AppResult<Json<Vec<Value>>> {
    let cast = CastMemberRepo::list(&state.pool).await?;
    let productions = ProductionRepo::list(&state.pool).await?;

    let by_id: HashMap<DbId, Production> = productions.into_iter().map(|p| (p.id, p)).collect();

    let forms = cast
        .iter()
        .map(|member| {
            let production = member.production_id.and_then(|id| by_id.get(&id));
            transfer::cast_member(member, production, &[])
        })
        .collect();
    Ok(Json(forms))
}

/// POST /cast_members
pub async fn create(
    State(state): State<AppState>,
    _user: CurrentUser,
    Json(input): Json<CreateCastMember>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let member = CastMemberRepo::create(&state.pool, &input).await?;
    let production = related_production(&state, &member).await?;
    Ok((
        StatusCode::CREATED,
        Json(transfer::cast_member(&member, production.as_ref(), &[])),
    ))
}

/// GET /cast_members/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Value>> {
    let member = CastMemberRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Cast member",
        }))?;

    let production = related_production(&state, &member).await?;
    Ok(Json(transfer::cast_member(&member, production.as_ref(), &[])))
}

/// PATCH /cast_members/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCastMember>,
) -> AppResult<Json<Value>> {
    let member = CastMemberRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Cast member",
        }))?;

    let production = related_production(&state, &member).await?;
    Ok(Json(transfer::cast_member(&member, production.as_ref(), &[])))
}

/// DELETE /cast_members/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Value>> {
    let deleted = CastMemberRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(json!({})))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Cast member",
        }))
    }
}

/// Fetch the production row a cast member points at, if any. A dangling
/// `production_id` resolves to `None` and the form omits the production.
async fn related_production(
    state: &AppState,
    member: &CastMember,
) -> AppResult<Option<Production>> {
    match member.production_id {
        Some(production_id) => Ok(ProductionRepo::find_by_id(&state.pool, production_id).await?),
        None => Ok(None),
    }
}
