use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Product;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AddFavoriteRequest {
    pub product_id: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FavoriteProductList {
    pub items: Vec<Product>,
}
