use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter};
use uuid::Uuid;

use super::generic::{GenericRepository, RepositoryEntity};
use crate::{
    entity::generated_videos,
    error::{AppError, AppResult},
    pagination::{Page, PaginationQuery},
};

impl RepositoryEntity for generated_videos::Entity {
    const LABEL: &'static str = "Generated video";

    fn search_columns() -> Vec<generated_videos::Column> {
        vec![generated_videos::Column::Script]
    }

    fn order_column() -> generated_videos::Column {
        generated_videos::Column::CreatedAt
    }
}

pub struct GeneratedVideosRepository {
    videos: GenericRepository<generated_videos::Entity>,
}

impl GeneratedVideosRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            videos: GenericRepository::new(db),
        }
    }

    pub async fn by_user(
        &self,
        user_id: Uuid,
        query: &PaginationQuery,
    ) -> AppResult<Page<generated_videos::Model>> {
        let select = self
            .videos
            .filtered(query)
            .filter(generated_videos::Column::UserId.eq(user_id));
        self.videos.paginate(select, query.window()).await
    }

    /// Another user's video is reported as missing rather than forbidden.
    pub async fn owned(&self, id: i32, user_id: Uuid) -> AppResult<generated_videos::Model> {
        let video = self.videos.get(id).await?;
        if video.user_id != user_id {
            return Err(AppError::not_found(generated_videos::Entity::LABEL));
        }
        Ok(video)
    }
}

impl From<DatabaseConnection> for GeneratedVideosRepository {
    fn from(db: DatabaseConnection) -> Self {
        Self::new(db)
    }
}
