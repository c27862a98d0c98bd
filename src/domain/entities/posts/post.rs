//! Post / Comment Entity
//!
//! 게시글과 게시글에 내장(embedded)된 댓글입니다 (`posts` 컬렉션).
//!
//! ## 불변 조건
//!
//! - `posted_by`는 생성 후 변경되지 않으며, 작성자 프로필만 수정/삭제할 수 있습니다.
//! - 댓글 id는 같은 게시글 안에서 유일합니다 (`ObjectId::new()`로 생성).
//! - `comments`는 삽입 순서를 유지하고, 삭제는 나머지 댓글의 상대 순서를 보존합니다.

use std::collections::HashMap;
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user_profile::UserProfile;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub comment_text: String,
    /// 작성자 UserProfile 참조
    pub posted_by: ObjectId,
    #[serde(default = "DateTime::now")]
    pub created_at: DateTime,
}

impl Comment {
    pub fn new(comment_text: String, posted_by: ObjectId) -> Self {
        Self {
            id: ObjectId::new(),
            comment_text,
            posted_by,
            created_at: DateTime::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub post_text: String,
    /// 작성자 UserProfile 참조 (불변)
    pub posted_by: ObjectId,
    /// 작성자 User 참조
    pub user: ObjectId,
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Post {
    pub fn new(title: String, post_text: String, posted_by: ObjectId, user: ObjectId) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            title,
            post_text,
            posted_by,
            user,
            comments: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, profile_id: &ObjectId) -> bool {
        &self.posted_by == profile_id
    }

    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
        self.updated_at = DateTime::now();
    }

    /// `comment_id`와 16진수 표현이 같은 댓글만 제거하고 나머지 순서를 유지합니다.
    ///
    /// 일치하는 댓글이 없으면 아무것도 바뀌지 않으며, 제거된 개수를 반환합니다.
    pub fn remove_comment(&mut self, comment_id: &str) -> usize {
        let before = self.comments.len();
        self.comments.retain(|comment| comment.id.to_hex() != comment_id);
        let removed = before - self.comments.len();

        if removed > 0 {
            self.updated_at = DateTime::now();
        }
        removed
    }

    /// 게시글과 댓글이 참조하는 모든 프로필 id (중복 제거, 등장 순서 유지)
    pub fn author_ids(&self) -> Vec<ObjectId> {
        let mut ids = vec![self.posted_by];
        for comment in &self.comments {
            if !ids.contains(&comment.posted_by) {
                ids.push(comment.posted_by);
            }
        }
        ids
    }

    /// 참조를 프로필 문서로 치환합니다. 조회되지 않은 프로필은 `None`이 됩니다.
    pub fn populate(self, authors: &HashMap<ObjectId, UserProfile>) -> PopulatedPost {
        PopulatedPost {
            id: self.id,
            title: self.title,
            post_text: self.post_text,
            posted_by: authors.get(&self.posted_by).cloned(),
            user: self.user,
            comments: self.comments
                .into_iter()
                .map(|comment| PopulatedComment {
                    posted_by: authors.get(&comment.posted_by).cloned(),
                    id: comment.id,
                    comment_text: comment.comment_text,
                    created_at: comment.created_at,
                })
                .collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// 작성자 프로필이 채워진 게시글
#[derive(Debug, Clone, PartialEq)]
pub struct PopulatedPost {
    pub id: Option<ObjectId>,
    pub title: String,
    pub post_text: String,
    pub posted_by: Option<UserProfile>,
    pub user: ObjectId,
    pub comments: Vec<PopulatedComment>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PopulatedComment {
    pub id: ObjectId,
    pub comment_text: String,
    pub posted_by: Option<UserProfile>,
    pub created_at: DateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_with_comments(texts: &[&str]) -> Post {
        let mut post = Post::new("title".into(), "text".into(), ObjectId::new(), ObjectId::new());
        for text in texts {
            post.add_comment(Comment::new(text.to_string(), ObjectId::new()));
        }
        post
    }

    #[test]
    fn test_remove_comment_keeps_order_of_the_rest() {
        let mut post = post_with_comments(&["A", "B", "C"]);
        let b_id = post.comments[1].id.to_hex();

        assert_eq!(post.remove_comment(&b_id), 1);

        let texts: Vec<_> = post.comments.iter().map(|c| c.comment_text.as_str()).collect();
        assert_eq!(texts, vec!["A", "C"]);
    }

    #[test]
    fn test_remove_unknown_comment_is_noop() {
        let mut post = post_with_comments(&["A", "B"]);

        assert_eq!(post.remove_comment("not-an-id"), 0);
        assert_eq!(post.remove_comment(&ObjectId::new().to_hex()), 0);
        assert_eq!(post.comments.len(), 2);
    }

    #[test]
    fn test_author_ids_are_unique() {
        let mut post = post_with_comments(&[]);
        let owner = post.posted_by;
        let other = ObjectId::new();
        post.add_comment(Comment::new("1".into(), owner));
        post.add_comment(Comment::new("2".into(), other));
        post.add_comment(Comment::new("3".into(), other));

        assert_eq!(post.author_ids(), vec![owner, other]);
    }

    #[test]
    fn test_populate_resolves_known_authors_only() {
        let mut post = post_with_comments(&[]);
        let ghost = ObjectId::new();
        post.add_comment(Comment::new("hi".into(), ghost));

        let mut profile = UserProfile::new(post.user, "alice".into());
        profile.id = Some(post.posted_by);
        let authors = HashMap::from([(post.posted_by, profile.clone())]);

        let populated = post.populate(&authors);

        assert_eq!(populated.posted_by, Some(profile));
        assert_eq!(populated.comments[0].posted_by, None);
    }

    #[test]
    fn test_bson_field_names() {
        let post = post_with_comments(&["A"]);
        let document = mongodb::bson::to_document(&post).unwrap();

        assert!(document.contains_key("postText"));
        assert!(document.contains_key("postedBy"));
        assert!(document.contains_key("createdAt"));
        assert!(!document.contains_key("_id"));
        let comment = document.get_array("comments").unwrap()[0].as_document().unwrap();
        assert!(comment.contains_key("_id"));
        assert!(comment.contains_key("commentText"));
    }
}
