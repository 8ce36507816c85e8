use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    dto::comments::{CommentList, CreateCommentRequest, UpdateCommentRequest},
    error::AppResult,
    middleware::auth::AuthUser,
    models::Comment,
    pagination::PaginationQuery,
    response::{ApiResponse, RecordCount, Removed},
    services::comment_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_comments).post(create_comment))
        .route("/paginated", get(paginate_comments))
        .route("/totalRecordsPaginated", get(count_comments))
        .route("/count/{product_id}", get(count_for_product))
        .route(
            "/{id}",
            get(get_comment).put(update_comment).delete(delete_comment),
        )
}

#[utoipa::path(
    get,
    path = "/api/comments",
    responses(
        (status = 200, description = "All comments", body = ApiResponse<CommentList>)
    ),
    tag = "Comments"
)]
pub async fn list_comments(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<CommentList>>> {
    Ok(Json(comment_service::list_comments(&state).await?))
}

#[utoipa::path(
    get,
    path = "/api/comments/paginated",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Page of comments, `id` scopes to a product", body = ApiResponse<CommentList>)
    ),
    tag = "Comments"
)]
pub async fn paginate_comments(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> AppResult<Json<ApiResponse<CommentList>>> {
    Ok(Json(comment_service::paginate_comments(&state, query).await?))
}

#[utoipa::path(
    get,
    path = "/api/comments/totalRecordsPaginated",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Matching comment count", body = ApiResponse<RecordCount>)
    ),
    tag = "Comments"
)]
pub async fn count_comments(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> AppResult<Json<ApiResponse<RecordCount>>> {
    Ok(Json(comment_service::count_comments(&state, query).await?))
}

#[utoipa::path(
    get,
    path = "/api/comments/count/{product_id}",
    params(
        ("product_id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Number of comments on a product", body = ApiResponse<RecordCount>),
        (status = 404, description = "Product not found")
    ),
    tag = "Comments"
)]
pub async fn count_for_product(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
) -> AppResult<Json<ApiResponse<RecordCount>>> {
    Ok(Json(comment_service::count_for_product(&state, product_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/comments/{id}",
    params(
        ("id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Comment", body = ApiResponse<Comment>),
        (status = 404, description = "Comment not found")
    ),
    tag = "Comments"
)]
pub async fn get_comment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Comment>>> {
    Ok(Json(comment_service::get_comment(&state, id).await?))
}

#[utoipa::path(
    post,
    path = "/api/comments",
    request_body = CreateCommentRequest,
    responses(
        (status = 200, description = "Create comment", body = ApiResponse<Comment>),
        (status = 404, description = "Product not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Comments"
)]
pub async fn create_comment(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateCommentRequest>,
) -> AppResult<Json<ApiResponse<Comment>>> {
    Ok(Json(comment_service::create_comment(&state, &user, payload).await?))
}

#[utoipa::path(
    put,
    path = "/api/comments/{id}",
    params(
        ("id" = i32, Path, description = "Comment ID")
    ),
    request_body = UpdateCommentRequest,
    responses(
        (status = 200, description = "Updated comment", body = ApiResponse<Comment>),
        (status = 403, description = "Not the author")
    ),
    security(("bearer_auth" = [])),
    tag = "Comments"
)]
pub async fn update_comment(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCommentRequest>,
) -> AppResult<Json<ApiResponse<Comment>>> {
    Ok(Json(
        comment_service::update_comment(&state, &user, id, payload).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/comments/{id}",
    params(
        ("id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Deleted comment", body = ApiResponse<Removed>),
        (status = 403, description = "Not the author")
    ),
    security(("bearer_auth" = [])),
    tag = "Comments"
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Removed>>> {
    Ok(Json(comment_service::delete_comment(&state, &user, id).await?))
}
