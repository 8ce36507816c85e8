use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{models::Product, pagination::PaginationQuery, repositories::products::ProductScope};

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    pub price: i64,
    pub store_id: i32,
    pub category_id: i32,
    pub marketplace_id: i32,
    pub status_id: i32,
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub category_id: Option<i32>,
    pub marketplace_id: Option<i32>,
    pub status_id: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductList {
    pub items: Vec<Product>,
}

/// Catalog listing query. The pagination fields are spelled out rather than flattened so
/// numeric values still parse from the query string.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Store the listing is scoped to.
    pub id: Option<i32>,
    pub page: Option<i64>,
    #[serde(alias = "recordsNumber")]
    pub per_page: Option<i64>,
    /// Matches name or description.
    pub filter: Option<String>,
    pub category_id: Option<i32>,
    pub marketplace_id: Option<i32>,
    pub status_id: Option<i32>,
}

impl ProductQuery {
    pub fn pagination(&self) -> PaginationQuery {
        PaginationQuery {
            id: self.id,
            page: self.page,
            per_page: self.per_page,
            filter: self.filter.clone(),
        }
    }

    pub fn scope(&self) -> ProductScope {
        ProductScope {
            category_id: self.category_id,
            marketplace_id: self.marketplace_id,
            status_id: self.status_id,
        }
    }
}
