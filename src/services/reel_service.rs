use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set};

use crate::{
    audit::record,
    dto::reels::{CreateReelRequest, ReelList, UpdateReelRequest},
    entity::reels,
    error::AppResult,
    middleware::auth::{AuthUser, ensure_owner},
    models::Reel,
    pagination::PaginationQuery,
    response::{ApiResponse, Meta, RecordCount, Removed},
    services::required,
    state::AppState,
    unit_of_work::{ProductsUnitOfWork, ReelsUnitOfWork},
};

pub async fn list_reels(state: &AppState) -> AppResult<ApiResponse<ReelList>> {
    let items = ReelsUnitOfWork::new(&state.orm)
        .get_all()
        .await?
        .into_iter()
        .map(Reel::from)
        .collect();
    Ok(ApiResponse::success("Reels", ReelList { items }, Some(Meta::empty())))
}

pub async fn reels_of_product(
    state: &AppState,
    product_id: i32,
) -> AppResult<ApiResponse<ReelList>> {
    let items = ReelsUnitOfWork::new(&state.orm)
        .by_product(product_id)
        .await?
        .into_iter()
        .map(Reel::from)
        .collect();
    Ok(ApiResponse::success("Reels", ReelList { items }, Some(Meta::empty())))
}

pub async fn paginate_reels(
    state: &AppState,
    query: PaginationQuery,
) -> AppResult<ApiResponse<ReelList>> {
    let page = ReelsUnitOfWork::new(&state.orm)
        .get_paginated(&query)
        .await?
        .map(Reel::from);
    let meta = page.meta();
    Ok(ApiResponse::success("Reels", ReelList { items: page.items }, Some(meta)))
}

pub async fn count_reels(
    state: &AppState,
    query: PaginationQuery,
) -> AppResult<ApiResponse<RecordCount>> {
    let total = ReelsUnitOfWork::new(&state.orm).count(&query).await?;
    Ok(ApiResponse::success("Total records", RecordCount { total }, None))
}

pub async fn get_reel(state: &AppState, id: i32) -> AppResult<ApiResponse<Reel>> {
    let reel = ReelsUnitOfWork::new(&state.orm).get(id).await?;
    Ok(ApiResponse::success("Reel", reel.into(), None))
}

pub async fn create_reel(
    state: &AppState,
    user: &AuthUser,
    payload: CreateReelRequest,
) -> AppResult<ApiResponse<Reel>> {
    let owner = ProductsUnitOfWork::new(&state.orm)
        .owner_of(payload.product_id)
        .await?;
    ensure_owner(user, owner)?;

    let reel = ReelsUnitOfWork::new(&state.orm)
        .add(reels::ActiveModel {
            id: NotSet,
            name: Set(required(payload.name, "Name")?),
            reel_uri: Set(required(payload.reel_uri, "Reel URI")?),
            product_id: Set(payload.product_id),
            created_at: Set(Utc::now()),
        })
        .await?;

    record(
        &state.orm,
        user.user_id,
        "reel_create",
        "reels",
        serde_json::json!({ "id": reel.id, "product_id": reel.product_id }),
    )
    .await;

    Ok(ApiResponse::success("Reel created", reel.into(), Some(Meta::empty())))
}

pub async fn update_reel(
    state: &AppState,
    user: &AuthUser,
    id: i32,
    payload: UpdateReelRequest,
) -> AppResult<ApiResponse<Reel>> {
    let uow = ReelsUnitOfWork::new(&state.orm);
    ensure_owner(user, uow.owner_of(id).await?)?;

    let mut active: reels::ActiveModel = uow.get(id).await?.into();
    if let Some(name) = payload.name {
        active.name = Set(required(name, "Name")?);
    }
    if let Some(reel_uri) = payload.reel_uri {
        active.reel_uri = Set(required(reel_uri, "Reel URI")?);
    }
    let reel = uow.update(active).await?;

    record(
        &state.orm,
        user.user_id,
        "reel_update",
        "reels",
        serde_json::json!({ "id": id }),
    )
    .await;

    Ok(ApiResponse::success("Updated", reel.into(), Some(Meta::empty())))
}

pub async fn delete_reel(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResponse<Removed>> {
    let uow = ReelsUnitOfWork::new(&state.orm);
    ensure_owner(user, uow.owner_of(id).await?)?;
    uow.delete(id).await?;

    record(
        &state.orm,
        user.user_id,
        "reel_delete",
        "reels",
        serde_json::json!({ "id": id }),
    )
    .await;

    Ok(ApiResponse::success("Deleted", Removed { id }, Some(Meta::empty())))
}
