//! Transfer forms: the JSON shape each record takes on the wire.
//!
//! A form is an ordered JSON object built from a record plus related rows
//! the caller already fetched. Nesting goes one level deep and every
//! nested call cuts the edge pointing back at its parent, so the
//! owner/pet and production/cast-member cycles cannot recurse. Excluded
//! keys are omitted entirely rather than set to `null`.

use serde_json::{json, Value};

use crate::models::cast_member::CastMember;
use crate::models::owner::Owner;
use crate::models::pet::Pet;
use crate::models::production::Production;
use crate::models::user::User;

/// Relationship edges a caller can exclude from a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// The `pets` list under an owner.
    OwnerPets,
    /// The `owner` object under a pet.
    PetOwner,
    /// The `cast_members` list under a production.
    ProductionCastMembers,
    /// The `production` object under a cast member.
    CastMemberProduction,
}

/// Build the form for one owner.
///
/// `pets` holds the rows fetched for the `pets` key; the key is an empty
/// array when the owner has none and is dropped when the edge is
/// excluded.
pub fn owner(record: &Owner, pets: &[Pet], exclude: &[Edge]) -> Value {
    let mut form = json!({
        "id": record.id,
        "name": record.name,
    });
    if !exclude.contains(&Edge::OwnerPets) {
        let nested = pets
            .iter()
            .map(|p| pet(p, None, &[Edge::PetOwner]))
            .collect();
        form["pets"] = Value::Array(nested);
    }
    form
}

/// Build the form for one pet.
///
/// The `owner` key nests the owner's form without its pet list. It is
/// omitted when the edge is excluded or when no owner row exists for
/// `owner_id`.
pub fn pet(record: &Pet, owner_record: Option<&Owner>, exclude: &[Edge]) -> Value {
    let mut form = json!({
        "id": record.id,
        "name": record.name,
        "owner_id": record.owner_id,
    });
    if !exclude.contains(&Edge::PetOwner) {
        if let Some(found) = owner_record {
            form["owner"] = owner(found, &[], &[Edge::OwnerPets]);
        }
    }
    form
}

/// Build the form for one production, cast list included.
pub fn production(record: &Production, cast: &[CastMember], exclude: &[Edge]) -> Value {
    let mut form = json!({
        "id": record.id,
        "title": record.title,
        "genre": record.genre,
        "budget": record.budget,
        "image": record.image,
        "director": record.director,
        "description": record.description,
        "ongoing": record.ongoing,
        "created_at": record.created_at,
        "updated_at": record.updated_at,
    });
    if !exclude.contains(&Edge::ProductionCastMembers) {
        let nested = cast
            .iter()
            .map(|m| cast_member(m, None, &[Edge::CastMemberProduction]))
            .collect();
        form["cast_members"] = Value::Array(nested);
    }
    form
}

/// Build the form for one cast member.
///
/// The `production` key nests the production's form without its cast
/// list. It is omitted when the edge is excluded or when no production
/// row exists for `production_id`.
pub fn cast_member(
    record: &CastMember,
    production_record: Option<&Production>,
    exclude: &[Edge],
) -> Value {
    let mut form = json!({
        "id": record.id,
        "name": record.name,
        "role": record.role,
        "production_id": record.production_id,
        "created_at": record.created_at,
        "updated_at": record.updated_at,
    });
    if !exclude.contains(&Edge::CastMemberProduction) {
        if let Some(found) = production_record {
            form["production"] = production(found, &[], &[Edge::ProductionCastMembers]);
        }
    }
    form
}

/// Build the form for one user. Only `id` and `username` appear; the
/// password hash stays server side.
pub fn user(record: &User) -> Value {
    json!({
        "id": record.id,
        "username": record.username,
    })
}
