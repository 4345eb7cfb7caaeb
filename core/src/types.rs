//! Domain DTOs for the posts API.
//!
//! # Design
//! These types mirror the remote resource's JSON shape (`userId` in
//! camelCase) but are defined independently from the mock-server crate.
//! Integration tests catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a post.
pub type PostId = i64;

/// User id carried by every freshly drafted post.
pub const DRAFT_USER_ID: i64 = 1;

/// A single post. `id` is `None` for a draft that has not been created yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PostId>,
    pub title: String,
    pub body: String,
}

impl Post {
    /// The blank edit buffer: no id, empty title and body.
    pub fn draft() -> Self {
        Self {
            user_id: DRAFT_USER_ID,
            id: None,
            title: String::new(),
            body: String::new(),
        }
    }

    pub fn is_draft(&self) -> bool {
        self.id.is_none()
    }
}

impl Default for Post {
    fn default() -> Self {
        Self::draft()
    }
}

/// Request payload for creating a post. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

impl From<&Post> for NewPost {
    fn from(post: &Post) -> Self {
        Self {
            user_id: post.user_id,
            title: post.title.clone(),
            body: post.body.clone(),
        }
    }
}
