#![allow(dead_code)]

use chrono::Utc;
use reelbuy_api::{
    config::{AppConfig, VideoApiConfig},
    db::{create_orm_conn, run_migrations},
    entity::{categories, marketplaces, products, statuses, stores, users},
    middleware::auth::{ADMIN_ROLE, AuthUser, USER_ROLE},
    services::auth_service::hash_password,
    state::AppState,
};
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
};
use uuid::Uuid;

pub const TEST_SECRET: &str = "test-secret";
pub const TEST_PASSWORD: &str = "secret123";

pub fn test_config(video_base_url: &str) -> AppConfig {
    AppConfig {
        database_url: "sqlite::memory:".to_string(),
        db_max_connections: 1,
        host: "127.0.0.1".to_string(),
        port: 0,
        jwt_secret: TEST_SECRET.to_string(),
        jwt_ttl_hours: 1,
        video_api: VideoApiConfig {
            base_url: video_base_url.to_string(),
            api_key: "test-key".to_string(),
            timeout_secs: 5,
        },
    }
}

/// Fresh in-memory SQLite database with every migration applied. A single pooled
/// connection keeps the in-memory database alive for the whole test.
pub async fn setup_state() -> anyhow::Result<AppState> {
    setup_state_with_video("http://127.0.0.1:1").await
}

pub async fn setup_state_with_video(video_base_url: &str) -> anyhow::Result<AppState> {
    let config = test_config(video_base_url);
    let orm = create_orm_conn(&config.database_url, config.db_max_connections).await?;
    run_migrations(&orm).await?;
    Ok(AppState::new(orm, config)?)
}

pub async fn create_user(state: &AppState, email: &str, role: &str) -> anyhow::Result<AuthUser> {
    let user = users::ActiveModel {
        id: Set(Uuid::new_v4()),
        email: Set(email.to_string()),
        password_hash: Set(hash_password(TEST_PASSWORD)?),
        first_name: Set("Test".into()),
        last_name: Set("User".into()),
        phone_number: Set(None),
        photo: Set(None),
        role: Set(role.into()),
        country_id: Set(None),
        profile_id: Set(None),
        reputation_id: Set(None),
        created_at: Set(Utc::now()),
    }
    .insert(&state.orm)
    .await?;

    Ok(AuthUser {
        user_id: user.id,
        role: user.role,
    })
}

pub async fn create_admin(state: &AppState) -> anyhow::Result<AuthUser> {
    create_user(state, "admin@example.com", ADMIN_ROLE).await
}

pub async fn create_buyer(state: &AppState, email: &str) -> anyhow::Result<AuthUser> {
    create_user(state, email, USER_ROLE).await
}

/// Lookup rows and one store, enough to hang products off.
pub struct Catalog {
    pub seller: AuthUser,
    pub store_id: i32,
    pub category_id: i32,
    pub marketplace_id: i32,
    pub status_id: i32,
}

pub async fn seed_catalog(state: &AppState) -> anyhow::Result<Catalog> {
    let seller = create_user(state, "seller@example.com", USER_ROLE).await?;

    let category = categories::ActiveModel {
        id: NotSet,
        name: Set("Clothing".into()),
    }
    .insert(&state.orm)
    .await?;
    let marketplace = marketplaces::ActiveModel {
        id: NotSet,
        name: Set("Online".into()),
    }
    .insert(&state.orm)
    .await?;
    let status = statuses::ActiveModel {
        id: NotSet,
        name: Set("Active".into()),
    }
    .insert(&state.orm)
    .await?;
    let store = stores::ActiveModel {
        id: NotSet,
        name: Set("Ferris Threads".into()),
        user_id: Set(seller.user_id),
        city_id: Set(None),
        created_at: Set(Utc::now()),
    }
    .insert(&state.orm)
    .await?;

    Ok(Catalog {
        seller,
        store_id: store.id,
        category_id: category.id,
        marketplace_id: marketplace.id,
        status_id: status.id,
    })
}

pub fn new_product(catalog: &Catalog, name: &str) -> products::ActiveModel {
    products::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        description: Set(format!("{name} description")),
        price: Set(25_000),
        like_count: Set(0),
        status_id: Set(catalog.status_id),
        category_id: Set(catalog.category_id),
        marketplace_id: Set(catalog.marketplace_id),
        store_id: Set(catalog.store_id),
        created_at: Set(Utc::now()),
    }
}

pub async fn add_product(
    state: &AppState,
    catalog: &Catalog,
    name: &str,
) -> anyhow::Result<products::Model> {
    Ok(new_product(catalog, name).insert(&state.orm).await?)
}
