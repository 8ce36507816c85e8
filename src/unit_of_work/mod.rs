//! Per-entity facades handed to the HTTP layer.
//!
//! A unit of work pairs the generic repository of an entity with its entity-specific
//! repository. The generic CRUD surface is forwarded here once; each submodule adds the
//! entity-specific forwards on its own alias.

use sea_orm::{DatabaseConnection, IntoActiveModel, PrimaryKeyTrait};

use crate::{
    error::AppResult,
    pagination::{Page, PaginationQuery},
    repositories::{GenericRepository, RepositoryEntity},
};

pub mod comments;
pub mod favorites;
pub mod generated_videos;
pub mod likes;
pub mod locations;
pub mod lookups;
pub mod products;
pub mod reels;
pub mod stores;

pub use comments::CommentsUnitOfWork;
pub use favorites::FavoritesUnitOfWork;
pub use generated_videos::GeneratedVideosUnitOfWork;
pub use likes::LikesUnitOfWork;
pub use locations::{CitiesUnitOfWork, DepartmentsUnitOfWork};
pub use lookups::LookupUnitOfWork;
pub use products::ProductsUnitOfWork;
pub use reels::ReelsUnitOfWork;
pub use stores::StoresUnitOfWork;

pub struct UnitOfWork<E, R> {
    generic: GenericRepository<E>,
    specific: R,
}

impl<E, R> UnitOfWork<E, R>
where
    E: RepositoryEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: Send,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    R: From<DatabaseConnection>,
{
    pub fn new(db: &DatabaseConnection) -> Self {
        Self {
            generic: GenericRepository::new(db.clone()),
            specific: R::from(db.clone()),
        }
    }

    pub async fn add(&self, active: E::ActiveModel) -> AppResult<E::Model> {
        self.generic.add(active).await
    }

    pub async fn get(&self, id: i32) -> AppResult<E::Model> {
        self.generic.get(id).await
    }

    pub async fn get_all(&self) -> AppResult<Vec<E::Model>> {
        self.generic.get_all().await
    }

    pub async fn get_paginated(&self, query: &PaginationQuery) -> AppResult<Page<E::Model>> {
        self.generic.get_paginated(query).await
    }

    pub async fn count(&self, query: &PaginationQuery) -> AppResult<u64> {
        self.generic.count(query).await
    }

    pub async fn update(&self, active: E::ActiveModel) -> AppResult<E::Model> {
        self.generic.update(active).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.generic.delete(id).await
    }
}
