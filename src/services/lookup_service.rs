//! Shared handlers for the name-only lookup tables. Reads are public, writes need an admin.

use sea_orm::{IntoActiveModel, PrimaryKeyTrait};

use crate::{
    audit::record,
    dto::lookups::{LookupList, LookupRequest},
    error::AppResult,
    middleware::auth::{AuthUser, ensure_admin},
    models::LookupItem,
    pagination::PaginationQuery,
    repositories::LookupEntity,
    response::{ApiResponse, Meta, RecordCount, Removed},
    services::required,
    state::AppState,
    unit_of_work::LookupUnitOfWork,
};

pub async fn list<E>(state: &AppState) -> AppResult<ApiResponse<LookupList>>
where
    E: LookupEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: Send,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    let items = LookupUnitOfWork::<E>::new(&state.orm)
        .get_all()
        .await?
        .into_iter()
        .map(E::item)
        .collect();
    Ok(ApiResponse::success(E::LABEL, LookupList { items }, Some(Meta::empty())))
}

pub async fn combo<E>(state: &AppState) -> AppResult<ApiResponse<LookupList>>
where
    E: LookupEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: Send,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    let items = LookupUnitOfWork::<E>::new(&state.orm).combo().await?;
    Ok(ApiResponse::success(E::LABEL, LookupList { items }, Some(Meta::empty())))
}

pub async fn paginated<E>(
    state: &AppState,
    query: PaginationQuery,
) -> AppResult<ApiResponse<LookupList>>
where
    E: LookupEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: Send,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    let page = LookupUnitOfWork::<E>::new(&state.orm)
        .get_paginated(&query)
        .await?
        .map(E::item);
    let meta = page.meta();
    Ok(ApiResponse::success(
        E::LABEL,
        LookupList { items: page.items },
        Some(meta),
    ))
}

pub async fn total<E>(
    state: &AppState,
    query: PaginationQuery,
) -> AppResult<ApiResponse<RecordCount>>
where
    E: LookupEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: Send,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    let total = LookupUnitOfWork::<E>::new(&state.orm).count(&query).await?;
    Ok(ApiResponse::success("Total records", RecordCount { total }, None))
}

pub async fn get<E>(state: &AppState, id: i32) -> AppResult<ApiResponse<LookupItem>>
where
    E: LookupEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: Send,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    let model = LookupUnitOfWork::<E>::new(&state.orm).get(id).await?;
    Ok(ApiResponse::success(E::LABEL, E::item(model), None))
}

pub async fn create<E>(
    state: &AppState,
    user: &AuthUser,
    payload: LookupRequest,
) -> AppResult<ApiResponse<LookupItem>>
where
    E: LookupEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: Send,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    ensure_admin(user)?;
    let name = required(payload.name, "Name")?;
    let item = E::item(
        LookupUnitOfWork::<E>::new(&state.orm)
            .add(E::new_active(name))
            .await?,
    );

    record(
        &state.orm,
        user.user_id,
        &format!("{}_create", E::RESOURCE),
        E::RESOURCE,
        serde_json::json!({ "id": item.id }),
    )
    .await;

    Ok(ApiResponse::success(
        format!("{} created", E::LABEL),
        item,
        Some(Meta::empty()),
    ))
}

pub async fn update<E>(
    state: &AppState,
    user: &AuthUser,
    id: i32,
    payload: LookupRequest,
) -> AppResult<ApiResponse<LookupItem>>
where
    E: LookupEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: Send,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    ensure_admin(user)?;
    let name = required(payload.name, "Name")?;
    let uow = LookupUnitOfWork::<E>::new(&state.orm);
    let existing = uow.get(id).await?;
    let item = E::item(uow.update(E::renamed(existing, name)).await?);

    record(
        &state.orm,
        user.user_id,
        &format!("{}_update", E::RESOURCE),
        E::RESOURCE,
        serde_json::json!({ "id": id }),
    )
    .await;

    Ok(ApiResponse::success("Updated", item, Some(Meta::empty())))
}

pub async fn delete<E>(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResponse<Removed>>
where
    E: LookupEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: Send,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    ensure_admin(user)?;
    LookupUnitOfWork::<E>::new(&state.orm).delete(id).await?;

    record(
        &state.orm,
        user.user_id,
        &format!("{}_delete", E::RESOURCE),
        E::RESOURCE,
        serde_json::json!({ "id": id }),
    )
    .await;

    Ok(ApiResponse::success("Deleted", Removed { id }, Some(Meta::empty())))
}
