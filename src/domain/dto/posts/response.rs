//! 게시글 응답 DTO
//!
//! 작성자 표현 방식에 따라 두 가지 형태가 있습니다.
//!
//! - [`PostResponse`]: `postedBy`가 프로필 id 문자열 (수정 결과)
//! - [`PopulatedPostResponse`]: `postedBy`가 프로필 문서 (조회, 작성, 댓글 작성 결과)

use serde::Serialize;
use crate::domain::dto::users::response::ProfileResponse;
use crate::domain::entities::posts::post::{Comment, PopulatedComment, PopulatedPost, Post};
use crate::utils::object_id::format_timestamp;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentView<A> {
    #[serde(rename = "_id")]
    pub id: String,
    pub comment_text: String,
    pub posted_by: A,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView<A> {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub post_text: String,
    pub posted_by: A,
    pub user: String,
    pub comments: Vec<CommentView<A>>,
    pub created_at: String,
    pub updated_at: String,
}

pub type PostResponse = PostView<String>;
pub type CommentResponse = CommentView<String>;

/// 작성자를 찾지 못한 경우 `postedBy`는 `null`입니다.
pub type PopulatedPostResponse = PostView<Option<ProfileResponse>>;
pub type PopulatedCommentResponse = CommentView<Option<ProfileResponse>>;

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.to_hex(),
            comment_text: comment.comment_text,
            posted_by: comment.posted_by.to_hex(),
            created_at: format_timestamp(comment.created_at),
        }
    }
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: post.title,
            post_text: post.post_text,
            posted_by: post.posted_by.to_hex(),
            user: post.user.to_hex(),
            comments: post.comments.into_iter().map(CommentResponse::from).collect(),
            created_at: format_timestamp(post.created_at),
            updated_at: format_timestamp(post.updated_at),
        }
    }
}

impl From<PopulatedComment> for PopulatedCommentResponse {
    fn from(comment: PopulatedComment) -> Self {
        Self {
            id: comment.id.to_hex(),
            comment_text: comment.comment_text,
            posted_by: comment.posted_by.map(ProfileResponse::from),
            created_at: format_timestamp(comment.created_at),
        }
    }
}

impl From<PopulatedPost> for PopulatedPostResponse {
    fn from(post: PopulatedPost) -> Self {
        Self {
            id: post.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: post.title,
            post_text: post.post_text,
            posted_by: post.posted_by.map(ProfileResponse::from),
            user: post.user.to_hex(),
            comments: post.comments.into_iter().map(PopulatedCommentResponse::from).collect(),
            created_at: format_timestamp(post.created_at),
            updated_at: format_timestamp(post.updated_at),
        }
    }
}

/// `GET /api/post/{id}`
#[derive(Debug, Serialize)]
pub struct SinglePostResponse {
    pub post: PopulatedPostResponse,
}

/// `GET /api/posts`, `GET /api/account/{id}/posts`
#[derive(Debug, Serialize)]
pub struct PostListResponse {
    pub posts: Vec<PopulatedPostResponse>,
}

/// 작성/수정 결과
#[derive(Debug, Serialize)]
pub struct PostMutationResponse<T> {
    pub message: String,
    pub result: T,
}

/// `DELETE /api/post/{id}/comment`
#[derive(Debug, Serialize)]
pub struct CommentsResponse {
    pub message: String,
    pub comments: Vec<PopulatedCommentResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_post_response_json_shape() {
        let mut post = Post::new("Hello".into(), "World".into(), ObjectId::new(), ObjectId::new());
        post.id = Some(ObjectId::new());
        post.add_comment(Comment::new("nice".into(), post.posted_by));

        let json = serde_json::to_value(PostResponse::from(post.clone())).unwrap();

        assert_eq!(json["_id"], post.id.unwrap().to_hex());
        assert_eq!(json["postText"], "World");
        assert_eq!(json["postedBy"], post.posted_by.to_hex());
        assert_eq!(json["comments"][0]["commentText"], "nice");
        assert!(json["createdAt"].as_str().unwrap().contains('T'));
    }

    #[test]
    fn test_populated_post_with_missing_author_is_null() {
        let post = Post::new("Hello".into(), "World".into(), ObjectId::new(), ObjectId::new());
        let populated = post.populate(&Default::default());

        let json = serde_json::to_value(PopulatedPostResponse::from(populated)).unwrap();

        assert!(json["postedBy"].is_null());
        assert_eq!(json["comments"].as_array().unwrap().len(), 0);
    }
}
