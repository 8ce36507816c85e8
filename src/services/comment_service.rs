use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set};

use crate::{
    audit::record,
    dto::comments::{CommentList, CreateCommentRequest, UpdateCommentRequest},
    entity::comments,
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_owner},
    models::Comment,
    pagination::PaginationQuery,
    response::{ApiResponse, Meta, RecordCount, Removed},
    services::required,
    state::AppState,
    unit_of_work::{CommentsUnitOfWork, ProductsUnitOfWork},
};

const MAX_COMMENT_LEN: usize = 1000;

pub async fn list_comments(state: &AppState) -> AppResult<ApiResponse<CommentList>> {
    let items = CommentsUnitOfWork::new(&state.orm)
        .get_all()
        .await?
        .into_iter()
        .map(Comment::from)
        .collect();
    Ok(ApiResponse::success("Comments", CommentList { items }, Some(Meta::empty())))
}

/// Comments of one product when `id` is given, newest last.
pub async fn paginate_comments(
    state: &AppState,
    query: PaginationQuery,
) -> AppResult<ApiResponse<CommentList>> {
    let page = CommentsUnitOfWork::new(&state.orm)
        .get_paginated(&query)
        .await?
        .map(Comment::from);
    let meta = page.meta();
    Ok(ApiResponse::success("Comments", CommentList { items: page.items }, Some(meta)))
}

pub async fn count_comments(
    state: &AppState,
    query: PaginationQuery,
) -> AppResult<ApiResponse<RecordCount>> {
    let total = CommentsUnitOfWork::new(&state.orm).count(&query).await?;
    Ok(ApiResponse::success("Total records", RecordCount { total }, None))
}

pub async fn count_for_product(
    state: &AppState,
    product_id: i32,
) -> AppResult<ApiResponse<RecordCount>> {
    ProductsUnitOfWork::new(&state.orm).get(product_id).await?;
    let total = CommentsUnitOfWork::new(&state.orm)
        .count_for_product(product_id)
        .await?;
    Ok(ApiResponse::success("Comment count", RecordCount { total }, None))
}

pub async fn get_comment(state: &AppState, id: i32) -> AppResult<ApiResponse<Comment>> {
    let comment = CommentsUnitOfWork::new(&state.orm).get(id).await?;
    Ok(ApiResponse::success("Comment", comment.into(), None))
}

pub async fn create_comment(
    state: &AppState,
    user: &AuthUser,
    payload: CreateCommentRequest,
) -> AppResult<ApiResponse<Comment>> {
    let description = comment_text(payload.description)?;
    ProductsUnitOfWork::new(&state.orm)
        .get(payload.product_id)
        .await?;

    let comment = CommentsUnitOfWork::new(&state.orm)
        .add(comments::ActiveModel {
            id: NotSet,
            user_id: Set(user.user_id),
            product_id: Set(payload.product_id),
            description: Set(description),
            created_at: Set(Utc::now()),
        })
        .await?;

    record(
        &state.orm,
        user.user_id,
        "comment_create",
        "comments",
        serde_json::json!({ "id": comment.id, "product_id": comment.product_id }),
    )
    .await;

    Ok(ApiResponse::success("Comment created", comment.into(), Some(Meta::empty())))
}

pub async fn update_comment(
    state: &AppState,
    user: &AuthUser,
    id: i32,
    payload: UpdateCommentRequest,
) -> AppResult<ApiResponse<Comment>> {
    let uow = CommentsUnitOfWork::new(&state.orm);
    let existing = uow.get(id).await?;
    ensure_owner(user, existing.user_id)?;

    let mut active: comments::ActiveModel = existing.into();
    active.description = Set(comment_text(payload.description)?);
    let comment = uow.update(active).await?;

    record(
        &state.orm,
        user.user_id,
        "comment_update",
        "comments",
        serde_json::json!({ "id": id }),
    )
    .await;

    Ok(ApiResponse::success("Updated", comment.into(), Some(Meta::empty())))
}

pub async fn delete_comment(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResponse<Removed>> {
    let uow = CommentsUnitOfWork::new(&state.orm);
    ensure_owner(user, uow.author_of(id).await?)?;
    uow.delete(id).await?;

    record(
        &state.orm,
        user.user_id,
        "comment_delete",
        "comments",
        serde_json::json!({ "id": id }),
    )
    .await;

    Ok(ApiResponse::success("Deleted", Removed { id }, Some(Meta::empty())))
}

fn comment_text(description: String) -> AppResult<String> {
    let description = required(description, "Description")?;
    if description.chars().count() > MAX_COMMENT_LEN {
        return Err(AppError::BadRequest(format!(
            "Description cannot exceed {MAX_COMMENT_LEN} characters"
        )));
    }
    Ok(description)
}
