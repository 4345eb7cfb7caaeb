use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

pub type PostId = i64;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: i64,
    pub id: PostId,
    pub title: String,
    pub body: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

/// Full replacement payload for `PUT /posts/{id}`. A body `id` is ignored in
/// favour of the path.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplacePost {
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

pub type Db = Arc<RwLock<BTreeMap<PostId, Post>>>;

pub fn app() -> Router {
    app_with(Vec::new())
}

/// Router whose store starts out with `posts`.
pub fn app_with(posts: Vec<Post>) -> Router {
    let db: Db = Arc::new(RwLock::new(posts.into_iter().map(|p| (p.id, p)).collect()));
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/{id}", get(get_post).put(update_post).delete(delete_post))
        .with_state(db)
}

/// A handful of posts for demos.
pub fn sample_posts() -> Vec<Post> {
    [
        (1, "Getting started", "Pick a post and press Update to edit it."),
        (1, "Second thoughts", "Drafts without an id are created on save."),
        (2, "Housekeeping", "Delete removes a post from the list."),
    ]
    .into_iter()
    .zip(1..)
    .map(|((user_id, title, body), id)| Post {
        user_id,
        id,
        title: title.to_string(),
        body: body.to_string(),
    })
    .collect()
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, Vec::new()).await
}

pub async fn run_with(listener: TcpListener, posts: Vec<Post>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(posts)).await
}

async fn list_posts(State(db): State<Db>) -> Json<Vec<Post>> {
    let posts = db.read().await;
    Json(posts.values().cloned().collect())
}

async fn create_post(
    State(db): State<Db>,
    Json(input): Json<NewPost>,
) -> (StatusCode, Json<Post>) {
    let mut posts = db.write().await;
    let id = posts.keys().next_back().map_or(1, |last| last + 1);
    let post = Post {
        user_id: input.user_id,
        id,
        title: input.title,
        body: input.body,
    };
    posts.insert(id, post.clone());
    (StatusCode::CREATED, Json(post))
}

async fn get_post(
    State(db): State<Db>,
    Path(id): Path<PostId>,
) -> Result<Json<Post>, StatusCode> {
    let posts = db.read().await;
    posts.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_post(
    State(db): State<Db>,
    Path(id): Path<PostId>,
    Json(input): Json<ReplacePost>,
) -> Result<Json<Post>, StatusCode> {
    let mut posts = db.write().await;
    let post = posts.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    post.user_id = input.user_id;
    post.title = input.title;
    post.body = input.body;
    Ok(Json(post.clone()))
}

async fn delete_post(
    State(db): State<Db>,
    Path(id): Path<PostId>,
) -> Result<Json<Value>, StatusCode> {
    let mut posts = db.write().await;
    posts
        .remove(&id)
        .map(|_| Json(json!({})))
        .ok_or(StatusCode::NOT_FOUND)
}
