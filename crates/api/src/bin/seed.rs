//! Seed the database with demo data for local development.
//!
//! Wipes every table first, then inserts two owners with three pets, a
//! production with its cast, and a demo login account.

use playbill_api::auth::password::hash_password;
use playbill_db::models::cast_member::CreateCastMember;
use playbill_db::models::owner::CreateOwner;
use playbill_db::models::pet::CreatePet;
use playbill_db::models::production::CreateProduction;
use playbill_db::models::user::CreateUser;
use playbill_db::repositories::{CastMemberRepo, OwnerRepo, PetRepo, ProductionRepo, UserRepo};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().init();

    let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://app.db".into());

    let pool = playbill_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    playbill_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    // Start from a clean slate, children before parents.
    for table in [
        "sessions",
        "users",
        "cast_members",
        "productions",
        "pets",
        "owners",
    ] {
        sqlx::query(&format!("DELETE FROM {table}"))
            .execute(&pool)
            .await
            .expect("Failed to clear table");
    }

    // --- Owners and pets ---
    let joe = OwnerRepo::create(&pool, &CreateOwner { name: "joe".into() })
        .await
        .expect("Failed to insert owner");
    let anne = OwnerRepo::create(&pool, &CreateOwner { name: "anne".into() })
        .await
        .expect("Failed to insert owner");

    for (name, owner_id) in [("fido", joe.id), ("rex", joe.id), ("fluffy", anne.id)] {
        PetRepo::create(
            &pool,
            &CreatePet {
                name: name.into(),
                owner_id: Some(owner_id),
            },
        )
        .await
        .expect("Failed to insert pet");
    }

    // --- Productions and cast ---
    let hamlet = ProductionRepo::create(
        &pool,
        &CreateProduction {
            title: Some("Hamlet".into()),
            genre: Some("Drama".into()),
            budget: Some(100000.0),
            image: None,
            director: Some("Sam Gold".into()),
            description: Some("The Tragedy of Hamlet, Prince of Denmark.".into()),
            ongoing: Some(true),
        },
    )
    .await
    .expect("Failed to insert production");

    for (name, role) in [("Kevin", "Hamlet"), ("Patrick", "Claudius")] {
        CastMemberRepo::create(
            &pool,
            &CreateCastMember {
                name: Some(name.into()),
                role: Some(role.into()),
                production_id: Some(hamlet.id),
            },
        )
        .await
        .expect("Failed to insert cast member");
    }

    // --- Demo login account ---
    let password_hash = hash_password("password123").expect("Failed to hash password");
    UserRepo::create(
        &pool,
        &CreateUser {
            username: "joe".into(),
            password_hash,
        },
    )
    .await
    .expect("Failed to insert user");

    tracing::info!("Seeded demo data (login: joe / password123)");
}
