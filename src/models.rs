use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entity::{
    cities, comments, departments, favorites, generated_videos, products, reels, stores, users,
};

/// Row of any name-only lookup table (countries, categories, marketplaces, statuses,
/// reputations, profiles).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct LookupItem {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Department {
    pub id: i32,
    pub name: String,
    pub country_id: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct City {
    pub id: i32,
    pub name: String,
    pub department_id: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub photo: Option<String>,
    pub role: String,
    pub country_id: Option<i32>,
    pub profile_id: Option<i32>,
    pub reputation_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Store {
    pub id: i32,
    pub name: String,
    pub user_id: Uuid,
    pub city_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub like_count: i32,
    pub status_id: i32,
    pub category_id: i32,
    pub marketplace_id: i32,
    pub store_id: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductDetail {
    pub product: Product,
    pub reels: Vec<Reel>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Reel {
    pub id: i32,
    pub name: String,
    pub reel_uri: String,
    pub product_id: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Favorite {
    pub id: i32,
    pub user_id: Uuid,
    pub product_id: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Comment {
    pub id: i32,
    pub user_id: Uuid,
    pub product_id: i32,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LikeStatus {
    pub product_id: i32,
    pub liked: bool,
    pub like_count: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GeneratedVideo {
    pub id: i32,
    pub user_id: Uuid,
    pub external_video_id: Option<String>,
    pub script: String,
    pub avatar_id: String,
    pub voice_id: String,
    pub status: String,
    pub video_url: Option<String>,
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<departments::Model> for Department {
    fn from(model: departments::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            country_id: model.country_id,
        }
    }
}

impl From<cities::Model> for City {
    fn from(model: cities::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            department_id: model.department_id,
        }
    }
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            first_name: model.first_name,
            last_name: model.last_name,
            phone_number: model.phone_number,
            photo: model.photo,
            role: model.role,
            country_id: model.country_id,
            profile_id: model.profile_id,
            reputation_id: model.reputation_id,
            created_at: model.created_at,
        }
    }
}

impl From<stores::Model> for Store {
    fn from(model: stores::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            user_id: model.user_id,
            city_id: model.city_id,
            created_at: model.created_at,
        }
    }
}

impl From<products::Model> for Product {
    fn from(model: products::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
            like_count: model.like_count,
            status_id: model.status_id,
            category_id: model.category_id,
            marketplace_id: model.marketplace_id,
            store_id: model.store_id,
            created_at: model.created_at,
        }
    }
}

impl From<reels::Model> for Reel {
    fn from(model: reels::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            reel_uri: model.reel_uri,
            product_id: model.product_id,
            created_at: model.created_at,
        }
    }
}

impl From<favorites::Model> for Favorite {
    fn from(model: favorites::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            product_id: model.product_id,
            created_at: model.created_at,
        }
    }
}

impl From<comments::Model> for Comment {
    fn from(model: comments::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            product_id: model.product_id,
            description: model.description,
            created_at: model.created_at,
        }
    }
}

impl From<generated_videos::Model> for GeneratedVideo {
    fn from(model: generated_videos::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            external_video_id: model.external_video_id,
            script: model.script,
            avatar_id: model.avatar_id,
            voice_id: model.voice_id,
            status: model.status,
            video_url: model.video_url,
            error: model.error,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
