use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Reel;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateReelRequest {
    pub name: String,
    pub reel_uri: String,
    pub product_id: i32,
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateReelRequest {
    pub name: Option<String>,
    pub reel_uri: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReelList {
    pub items: Vec<Reel>,
}
