//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod about_repo;
pub mod contact_repo;
pub mod project_repo;
pub mod skill_repo;

pub use about_repo::AboutRepo;
pub use contact_repo::ContactRepo;
pub use project_repo::ProjectRepo;
pub use skill_repo::SkillRepo;
