use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::LookupItem;

/// Body for creating or renaming any name-only lookup row.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct LookupRequest {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LookupList {
    pub items: Vec<LookupItem>,
}
