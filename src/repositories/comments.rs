use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};
use uuid::Uuid;

use super::generic::{GenericRepository, RepositoryEntity};
use crate::{entity::comments, error::AppResult};

impl RepositoryEntity for comments::Entity {
    const LABEL: &'static str = "Comment";

    fn search_columns() -> Vec<comments::Column> {
        vec![comments::Column::Description]
    }

    fn order_column() -> comments::Column {
        comments::Column::CreatedAt
    }

    fn parent_column() -> Option<comments::Column> {
        Some(comments::Column::ProductId)
    }
}

pub struct CommentsRepository {
    comments: GenericRepository<comments::Entity>,
}

impl CommentsRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            comments: GenericRepository::new(db),
        }
    }

    pub async fn count_for_product(&self, product_id: i32) -> AppResult<u64> {
        Ok(comments::Entity::find()
            .filter(comments::Column::ProductId.eq(product_id))
            .count(self.comments.db())
            .await?)
    }

    pub async fn author_of(&self, comment_id: i32) -> AppResult<Uuid> {
        Ok(self.comments.get(comment_id).await?.user_id)
    }
}

impl From<DatabaseConnection> for CommentsRepository {
    fn from(db: DatabaseConnection) -> Self {
        Self::new(db)
    }
}
