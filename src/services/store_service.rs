use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set};

use crate::{
    audit::record,
    dto::stores::{CreateStoreRequest, StoreList, UpdateStoreRequest},
    entity::stores,
    error::AppResult,
    middleware::auth::{AuthUser, ensure_owner},
    models::Store,
    pagination::PaginationQuery,
    response::{ApiResponse, Meta, RecordCount, Removed},
    services::required,
    state::AppState,
    unit_of_work::StoresUnitOfWork,
};

pub async fn list_stores(state: &AppState) -> AppResult<ApiResponse<StoreList>> {
    let items = StoresUnitOfWork::new(&state.orm)
        .get_all()
        .await?
        .into_iter()
        .map(Store::from)
        .collect();
    Ok(ApiResponse::success("Stores", StoreList { items }, Some(Meta::empty())))
}

/// The caller's own stores, unpaginated, for the product form dropdown.
pub async fn combo_stores(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<StoreList>> {
    let items = StoresUnitOfWork::new(&state.orm)
        .combo(user.user_id)
        .await?
        .into_iter()
        .map(Store::from)
        .collect();
    Ok(ApiResponse::success("Stores", StoreList { items }, Some(Meta::empty())))
}

pub async fn paginate_stores(
    state: &AppState,
    query: PaginationQuery,
) -> AppResult<ApiResponse<StoreList>> {
    let page = StoresUnitOfWork::new(&state.orm)
        .get_paginated(&query)
        .await?
        .map(Store::from);
    let meta = page.meta();
    Ok(ApiResponse::success("Stores", StoreList { items: page.items }, Some(meta)))
}

pub async fn my_stores(
    state: &AppState,
    user: &AuthUser,
    query: PaginationQuery,
) -> AppResult<ApiResponse<StoreList>> {
    let page = StoresUnitOfWork::new(&state.orm)
        .by_owner(user.user_id, &query)
        .await?
        .map(Store::from);
    let meta = page.meta();
    Ok(ApiResponse::success("Stores", StoreList { items: page.items }, Some(meta)))
}

pub async fn count_stores(
    state: &AppState,
    query: PaginationQuery,
) -> AppResult<ApiResponse<RecordCount>> {
    let total = StoresUnitOfWork::new(&state.orm).count(&query).await?;
    Ok(ApiResponse::success("Total records", RecordCount { total }, None))
}

pub async fn get_store(state: &AppState, id: i32) -> AppResult<ApiResponse<Store>> {
    let store = StoresUnitOfWork::new(&state.orm).get(id).await?;
    Ok(ApiResponse::success("Store", store.into(), None))
}

pub async fn create_store(
    state: &AppState,
    user: &AuthUser,
    payload: CreateStoreRequest,
) -> AppResult<ApiResponse<Store>> {
    let store = StoresUnitOfWork::new(&state.orm)
        .add(stores::ActiveModel {
            id: NotSet,
            name: Set(required(payload.name, "Name")?),
            user_id: Set(user.user_id),
            city_id: Set(payload.city_id),
            created_at: Set(Utc::now()),
        })
        .await?;

    record(
        &state.orm,
        user.user_id,
        "store_create",
        "stores",
        serde_json::json!({ "id": store.id }),
    )
    .await;

    Ok(ApiResponse::success("Store created", store.into(), Some(Meta::empty())))
}

pub async fn update_store(
    state: &AppState,
    user: &AuthUser,
    id: i32,
    payload: UpdateStoreRequest,
) -> AppResult<ApiResponse<Store>> {
    let uow = StoresUnitOfWork::new(&state.orm);
    let existing = uow.get(id).await?;
    ensure_owner(user, existing.user_id)?;

    let mut active: stores::ActiveModel = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(required(name, "Name")?);
    }
    if let Some(city_id) = payload.city_id {
        active.city_id = Set(Some(city_id));
    }
    let store = uow.update(active).await?;

    record(
        &state.orm,
        user.user_id,
        "store_update",
        "stores",
        serde_json::json!({ "id": id }),
    )
    .await;

    Ok(ApiResponse::success("Updated", store.into(), Some(Meta::empty())))
}

pub async fn delete_store(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResponse<Removed>> {
    let uow = StoresUnitOfWork::new(&state.orm);
    ensure_owner(user, uow.owner_of(id).await?)?;
    uow.delete(id).await?;

    record(
        &state.orm,
        user.user_id,
        "store_delete",
        "stores",
        serde_json::json!({ "id": id }),
    )
    .await;

    Ok(ApiResponse::success("Deleted", Removed { id }, Some(Meta::empty())))
}
