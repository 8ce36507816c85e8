use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Store;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateStoreRequest {
    pub name: String,
    pub city_id: Option<i32>,
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateStoreRequest {
    pub name: Option<String>,
    pub city_id: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StoreList {
    pub items: Vec<Store>,
}
