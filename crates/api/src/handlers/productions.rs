//! Handlers for the `/productions` resource.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use playbill_core::error::CoreError;
use playbill_core::types::DbId;
use playbill_core::validation::check_budget;
use playbill_db::models::cast_member::CastMember;
use playbill_db::models::production::{CreateProduction, UpdateProduction};
use playbill_db::repositories::{CastMemberRepo, ProductionRepo};
use playbill_db::transfer;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::middleware::guard::CurrentUser;
use crate::state::AppState;

/// GET /productions
pub async fn list(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> AppResult<Json<Vec<Value>>> {
    let productions = ProductionRepo::list(&state.pool).await?;
    let cast = CastMemberRepo::list(&state.pool).await?;

    // Group cast members by production once instead of querying per row.
    let mut by_production: HashMap<DbId, Vec<CastMember>> = HashMap::new();
    for member in cast {
        if let Some(production_id) = member.production_id {
            by_production.entry(production_id).or_default().push(member);
        }
    }

    let empty = Vec::new();
    let forms = productions
        .iter()
        .map(|production| {
            transfer::production(
                production,
                by_production.get(&production.id).unwrap_or(&empty),
                &[],
            )
        })
        .collect();
    Ok(Json(forms))
}

/// POST /productions
pub async fn create(
    State(state): State<AppState>,
    _user: CurrentUser,
    Json(input): Json<CreateProduction>,
) -> AppResult<(StatusCode, Json<Value>)> {
    check_budget(input.budget)?;

    let production = ProductionRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(transfer::production(&production, &[], &[])),
    ))
}

/// GET /productions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Value>> {
    let production = ProductionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Production",
        }))?;

    let cast = CastMemberRepo::list_by_production(&state.pool, id).await?;
    Ok(Json(transfer::production(&production, &cast, &[])))
}

/// PATCH /productions/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProduction>,
) -> AppResult<Json<Value>> {
    check_budget(input.budget)?;

    let production = ProductionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Production",
        }))?;

    let cast = CastMemberRepo::list_by_production(&state.pool, id).await?;
    Ok(Json(transfer::production(&production, &cast, &[])))
}

/// DELETE /productions/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Value>> {
    let deleted = ProductionRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(json!({})))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Production",
        }))
    }
}
