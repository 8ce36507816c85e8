use uuid::Uuid;

use crate::{entity::reels, error::AppResult, repositories::reels::ReelsRepository};

use super::UnitOfWork;

pub type ReelsUnitOfWork = UnitOfWork<reels::Entity, ReelsRepository>;

impl ReelsUnitOfWork {
    pub async fn by_product(&self, product_id: i32) -> AppResult<Vec<reels::Model>> {
        self.specific.by_product(product_id).await
    }

    pub async fn owner_of(&self, reel_id: i32) -> AppResult<Uuid> {
        self.specific.owner_of(reel_id).await
    }
}
