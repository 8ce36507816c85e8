use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    entity::products,
    error::AppResult,
    pagination::{Page, PaginationQuery},
    repositories::likes::LikesRepository,
};

/// Likes have a composite key, so this facade wraps only the entity-specific repository.
pub struct LikesUnitOfWork {
    likes: LikesRepository,
}

impl LikesUnitOfWork {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self {
            likes: LikesRepository::new(db.clone()),
        }
    }

    pub async fn like(&self, user_id: Uuid, product_id: i32) -> AppResult<products::Model> {
        self.likes.like(user_id, product_id).await
    }

    pub async fn unlike(&self, user_id: Uuid, product_id: i32) -> AppResult<products::Model> {
        self.likes.unlike(user_id, product_id).await
    }

    pub async fn status(&self, user_id: Uuid, product_id: i32) -> AppResult<(bool, i32)> {
        self.likes.status(user_id, product_id).await
    }

    pub async fn liked_products(
        &self,
        user_id: Uuid,
        query: &PaginationQuery,
    ) -> AppResult<Page<products::Model>> {
        self.likes.liked_products(user_id, query).await
    }
}
