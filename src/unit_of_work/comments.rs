use uuid::Uuid;

use crate::{entity::comments, error::AppResult, repositories::comments::CommentsRepository};

use super::UnitOfWork;

pub type CommentsUnitOfWork = UnitOfWork<comments::Entity, CommentsRepository>;

impl CommentsUnitOfWork {
    pub async fn count_for_product(&self, product_id: i32) -> AppResult<u64> {
        self.specific.count_for_product(product_id).await
    }

    pub async fn author_of(&self, comment_id: i32) -> AppResult<Uuid> {
        self.specific.author_of(comment_id).await
    }
}
