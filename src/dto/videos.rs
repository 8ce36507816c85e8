use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::GeneratedVideo;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct GenerateVideoRequest {
    pub script: String,
    pub avatar_id: String,
    pub voice_id: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VideoList {
    pub items: Vec<GeneratedVideo>,
}
