//! Stateless HTTP request builder and response parser for the posts API.
//!
//! # Design
//! `PostClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller executes the actual HTTP round-trip.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{NewPost, Post, PostId};

/// Public JSON placeholder service the editor talks to by default.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

const JSON_CONTENT_TYPE: &str = "application/json";

/// Synchronous, stateless client for the posts API.
#[derive(Debug, Clone)]
pub struct PostClient {
    base_url: String,
}

impl Default for PostClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl PostClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/posts", self.base_url)
    }

    fn item_url(&self, id: PostId) -> String {
        format!("{}/posts/{id}", self.base_url)
    }

    pub fn build_list_posts(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.collection_url(),
            headers: json_headers(),
            body: None,
        }
    }

    pub fn build_create_post(&self, input: &NewPost) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.collection_url(),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    /// Build a full-replacement update. The whole post, id included, is sent.
    pub fn build_update_post(&self, post: &Post) -> Result<HttpRequest, ApiError> {
        let id = post.id.ok_or(ApiError::MissingId)?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.item_url(id),
            headers: json_headers(),
            body: Some(to_json(post)?),
        })
    }

    pub fn build_delete_post(&self, id: PostId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_posts(&self, response: HttpResponse) -> Result<Vec<Post>, ApiError> {
        check_status(&response, &[200])?;
        from_json(&response.body)
    }

    /// Parse the created post, which carries the server-assigned id.
    pub fn parse_create_post(&self, response: HttpResponse) -> Result<Post, ApiError> {
        check_status(&response, &[201])?;
        let post: Post = from_json(&response.body)?;
        if post.id.is_none() {
            return Err(ApiError::MissingId);
        }
        Ok(post)
    }

    /// Only the status is checked; the editor keeps its own copy of the
    /// saved post.
    pub fn parse_update_post(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, &[200])
    }

    pub fn parse_delete_post(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, &[200, 204])
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), JSON_CONTENT_TYPE.to_string())]
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::Serialization(e.to_string()))
}

fn from_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: &[u16]) -> Result<(), ApiError> {
    if expected.contains(&response.status) {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> PostClient {
        PostClient::new("http://localhost:3000")
    }

    fn saved(id: PostId) -> Post {
        Post {
            user_id: 1,
            id: Some(id),
            title: "Saved".to_string(),
            body: "Saved body".to_string(),
        }
    }

    #[test]
    fn build_list_posts_produces_correct_request() {
        let req = client().build_list_posts();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/posts");
        assert!(req.body.is_none());
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn build_create_post_produces_correct_request() {
        let input = NewPost {
            user_id: 1,
            title: "Hello".to_string(),
            body: "World".to_string(),
        };
        let req = client().build_create_post(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/posts");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"userId": 1, "title": "Hello", "body": "World"}));
    }

    #[test]
    fn build_update_post_sends_the_whole_post() {
        let req = client().build_update_post(&saved(7)).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:3000/posts/7");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["id"], 7);
        assert_eq!(body["title"], "Saved");
    }

    #[test]
    fn build_update_post_rejects_drafts() {
        let err = client().build_update_post(&Post::draft()).unwrap_err();
        assert!(matches!(err, ApiError::MissingId));
    }

    #[test]
    fn build_delete_post_produces_correct_request() {
        let req = client().build_delete_post(3);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3000/posts/3");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_posts_success() {
        let response = HttpResponse::new(200, r#"[{"userId":1,"id":1,"title":"A","body":"a"}]"#);
        let posts = client().parse_list_posts(response).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, Some(1));
    }

    #[test]
    fn parse_list_posts_not_found() {
        let err = client().parse_list_posts(HttpResponse::new(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_list_posts_bad_json() {
        let err = client().parse_list_posts(HttpResponse::new(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn parse_create_post_success() {
        let response = HttpResponse::new(201, r#"{"userId":1,"id":101,"title":"New","body":"b"}"#);
        let post = client().parse_create_post(response).unwrap();
        assert_eq!(post.id, Some(101));
    }

    #[test]
    fn parse_create_post_without_id_is_rejected() {
        let response = HttpResponse::new(201, r#"{"userId":1,"title":"New","body":"b"}"#);
        let err = client().parse_create_post(response).unwrap_err();
        assert!(matches!(err, ApiError::MissingId));
    }

    #[test]
    fn parse_create_post_wrong_status() {
        let err = client()
            .parse_create_post(HttpResponse::new(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_update_post_ignores_body() {
        assert!(client().parse_update_post(HttpResponse::new(200, "{}")).is_ok());
    }

    #[test]
    fn parse_delete_post_accepts_200_and_204() {
        assert!(client().parse_delete_post(HttpResponse::new(200, "{}")).is_ok());
        assert!(client().parse_delete_post(HttpResponse::new(204, "")).is_ok());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = PostClient::new("http://localhost:3000/");
        assert_eq!(client.build_list_posts().path, "http://localhost:3000/posts");
    }
}
