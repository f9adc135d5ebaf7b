//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod about_repo;
pub mod element_repo;
pub mod media_repo;
pub mod project_repo;
pub mod section_repo;

pub use about_repo::AboutRepo;
pub use element_repo::ElementRepo;
pub use media_repo::MediaRepo;
pub use project_repo::ProjectRepo;
pub use section_repo::SectionRepo;
