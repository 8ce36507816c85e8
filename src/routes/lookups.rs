//! One router shape for every name-only lookup table, instantiated per entity in
//! `routes::create_api_router`. OpenAPI paths for these are generated in `doc.rs`.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use sea_orm::{IntoActiveModel, PrimaryKeyTrait};

use crate::{
    dto::lookups::{LookupList, LookupRequest},
    error::AppResult,
    middleware::auth::AuthUser,
    models::LookupItem,
    pagination::PaginationQuery,
    repositories::LookupEntity,
    response::{ApiResponse, RecordCount, Removed},
    services::lookup_service,
    state::AppState,
};

pub fn router<E>() -> Router<AppState>
where
    E: LookupEntity + 'static,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: Send,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    Router::new()
        .route("/", get(list::<E>).post(create::<E>))
        .route("/combo", get(combo::<E>))
        .route("/paginated", get(paginated::<E>))
        .route("/totalRecordsPaginated", get(total::<E>))
        .route(
            "/{id}",
            get(get_one::<E>).put(update::<E>).delete(delete::<E>),
        )
}

async fn list<E>(State(state): State<AppState>) -> AppResult<Json<ApiResponse<LookupList>>>
where
    E: LookupEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: Send,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    Ok(Json(lookup_service::list::<E>(&state).await?))
}

async fn combo<E>(State(state): State<AppState>) -> AppResult<Json<ApiResponse<LookupList>>>
where
    E: LookupEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: Send,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    Ok(Json(lookup_service::combo::<E>(&state).await?))
}

async fn paginated<E>(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> AppResult<Json<ApiResponse<LookupList>>>
where
    E: LookupEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: Send,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    Ok(Json(lookup_service::paginated::<E>(&state, query).await?))
}

async fn total<E>(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> AppResult<Json<ApiResponse<RecordCount>>>
where
    E: LookupEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: Send,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    Ok(Json(lookup_service::total::<E>(&state, query).await?))
}

async fn get_one<E>(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<LookupItem>>>
where
    E: LookupEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: Send,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    Ok(Json(lookup_service::get::<E>(&state, id).await?))
}

async fn create<E>(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<LookupRequest>,
) -> AppResult<Json<ApiResponse<LookupItem>>>
where
    E: LookupEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: Send,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    Ok(Json(lookup_service::create::<E>(&state, &user, payload).await?))
}

async fn update<E>(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<LookupRequest>,
) -> AppResult<Json<ApiResponse<LookupItem>>>
where
    E: LookupEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: Send,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    Ok(Json(
        lookup_service::update::<E>(&state, &user, id, payload).await?,
    ))
}

async fn delete<E>(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Removed>>>
where
    E: LookupEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: Send,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    Ok(Json(lookup_service::delete::<E>(&state, &user, id).await?))
}
