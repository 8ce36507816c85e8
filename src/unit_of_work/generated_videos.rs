use uuid::Uuid;

use crate::{
    entity::generated_videos,
    error::AppResult,
    pagination::{Page, PaginationQuery},
    repositories::generated_videos::GeneratedVideosRepository,
};

use super::UnitOfWork;

pub type GeneratedVideosUnitOfWork =
    UnitOfWork<generated_videos::Entity, GeneratedVideosRepository>;

impl GeneratedVideosUnitOfWork {
    pub async fn by_user(
        &self,
        user_id: Uuid,
        query: &PaginationQuery,
    ) -> AppResult<Page<generated_videos::Model>> {
        self.specific.by_user(user_id, query).await
    }

    pub async fn owned(&self, id: i32, user_id: Uuid) -> AppResult<generated_videos::Model> {
        self.specific.owned(id, user_id).await
    }
}
