//! Repository structs owning all SQL for their tables.
//!
//! Every method takes the pool as its first argument and returns
//! `sqlx::Error` untranslated; the API layer decides what each failure
//! means for a response.

pub mod cast_member_repo;
pub mod owner_repo;
pub mod pet_repo;
pub mod production_repo;
pub mod session_repo;
pub mod user_repo;

pub use cast_member_repo::CastMemberRepo;
pub use owner_repo::OwnerRepo;
pub use pet_repo::PetRepo;
pub use production_repo::ProductionRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
