//! Data access: one generic CRUD repository plus the entity-specific queries layered on it.

pub mod comments;
pub mod favorites;
pub mod generated_videos;
pub mod generic;
pub mod likes;
pub mod locations;
pub mod lookups;
pub mod products;
pub mod reels;
pub mod stores;
pub mod users;

pub use generic::{GenericRepository, RepositoryEntity};
pub use lookups::LookupEntity;
