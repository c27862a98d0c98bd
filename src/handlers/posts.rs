//! # Post HTTP Handlers
//!
//! 게시글과 댓글 엔드포인트입니다. 모든 경로는 `/api` scope 아래에 등록됩니다.
//!
//! | 메서드 | 경로 | 인증 | 응답 |
//! |--------|------|------|------|
//! | `GET` | `/post/{id}` | - | `{post}` |
//! | `GET` | `/posts` | - | `{posts}` |
//! | `GET` | `/account/{id}/posts` | - | `{posts}` |
//! | `POST` | `/post` | 필수 | `{message, result}` |
//! | `PUT` | `/post/{id}` | 필수 | `{message, result}` |
//! | `DELETE` | `/post/{id}` | 필수 | `{message}` |
//! | `POST` | `/post/{id}/comment` | 필수 | 게시글 |
//! | `DELETE` | `/post/{id}/comment` | - | `{message, comments}` |
//!
//! 모든 실패는 `AppError`를 통해 `{"error": "..."}` 형태로 응답합니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use crate::{
    core::errors::AppError,
    domain::dto::common::MessageResponse,
    domain::dto::posts::request::{CreateCommentRequest, CreatePostRequest, DeleteCommentRequest, UpdatePostRequest},
    domain::dto::posts::response::{
        CommentsResponse, PopulatedCommentResponse, PopulatedPostResponse, PostListResponse,
        PostMutationResponse, PostResponse, SinglePostResponse,
    },
    domain::models::auth::caller_identity::CallerIdentity,
    middlewares::AuthMiddleware,
    services::posts::PostService,
};

pub const POST_CREATED: &str = "Post successfully created!";
pub const POST_UPDATED: &str = "Successfully updated post!";
pub const POST_DELETED: &str = "Successfully deleted post!";
pub const COMMENT_DELETED: &str = "Successfully deleted comment";

#[get("/post/{post_id}")]
pub async fn get_post(post_id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let post = PostService::instance().get_one(&post_id).await?;

    Ok(HttpResponse::Ok().json(SinglePostResponse { post: post.into() }))
}

#[get("/posts")]
pub async fn get_posts() -> Result<HttpResponse, AppError> {
    let posts = PostService::instance().get_all().await?;

    Ok(HttpResponse::Ok().json(PostListResponse {
        posts: posts.into_iter().map(PopulatedPostResponse::from).collect(),
    }))
}

#[get("/account/{user_id}/posts")]
pub async fn get_account_posts(user_id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let posts = PostService::instance().get_all_by_account(&user_id).await?;

    Ok(HttpResponse::Ok().json(PostListResponse {
        posts: posts.into_iter().map(PopulatedPostResponse::from).collect(),
    }))
}

#[post("/post", wrap = "AuthMiddleware::required()")]
pub async fn create_post(
    caller: CallerIdentity,
    payload: web::Json<CreatePostRequest>,
) -> Result<HttpResponse, AppError> {
    let post = PostService::instance()
        .create(&caller, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(PostMutationResponse {
        message: POST_CREATED.to_string(),
        result: PopulatedPostResponse::from(post),
    }))
}

#[put("/post/{post_id}", wrap = "AuthMiddleware::required()")]
pub async fn update_post(
    caller: CallerIdentity,
    post_id: web::Path<String>,
    payload: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse, AppError> {
    let post = PostService::instance()
        .update(&caller, &post_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(PostMutationResponse {
        message: POST_UPDATED.to_string(),
        result: PostResponse::from(post),
    }))
}

#[delete("/post/{post_id}", wrap = "AuthMiddleware::required()")]
pub async fn delete_post(
    caller: CallerIdentity,
    post_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    PostService::instance().delete(&caller, &post_id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new(POST_DELETED)))
}

#[post("/post/{post_id}/comment", wrap = "AuthMiddleware::required()")]
pub async fn add_comment(
    caller: CallerIdentity,
    post_id: web::Path<String>,
    payload: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse, AppError> {
    let post = PostService::instance()
        .add_comment(&caller, &post_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(PopulatedPostResponse::from(post)))
}

/// 본문이 없거나 `commentID`가 비어 있으면 `Comment ID required!`
#[delete("/post/{post_id}/comment")]
pub async fn delete_comment(
    post_id: web::Path<String>,
    payload: Option<web::Json<DeleteCommentRequest>>,
) -> Result<HttpResponse, AppError> {
    let comment_id = payload.and_then(|body| body.into_inner().comment_id);

    let comments = PostService::instance()
        .delete_comment(&post_id, comment_id.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(CommentsResponse {
        message: COMMENT_DELETED.to_string(),
        comments: comments.into_iter().map(PopulatedCommentResponse::from).collect(),
    }))
}
