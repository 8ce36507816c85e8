use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Comment;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateCommentRequest {
    pub product_id: i32,
    pub description: String,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateCommentRequest {
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommentList {
    pub items: Vec<Comment>,
}
