//! Editor state and its reducer.
//!
//! # Design
//! `EditorState` is the whole state of the post editor. It changes only
//! through `EditorState::apply`, a total function from (state, event) to
//! the next state. The host performs the I/O and turns each outcome into an
//! `Event`; nothing here touches the network.

use crate::failure::Failure;
use crate::types::{Post, PostId};

/// Everything that can happen to the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The initial fetch returned the collection.
    FetchSucceeded(Vec<Post>),
    /// The initial fetch was cancelled, timed out or failed.
    FetchFailed(Failure),
    TitleChanged(String),
    BodyChanged(String),
    /// An existing post was picked for editing.
    EditSelected(Post),
    /// An update of the buffer was accepted by the server.
    Updated(Post),
    /// A create was accepted; the post carries the server-assigned id.
    Created(Post),
    Deleted(PostId),
    /// A save or delete failed.
    OperationFailed(Failure),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    posts: Vec<Post>,
    error: Option<Failure>,
    loading: bool,
    edit: Post,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::mounted()
    }
}

impl EditorState {
    /// State right after mount: nothing loaded yet, fetch in flight.
    pub fn mounted() -> Self {
        Self {
            posts: Vec::new(),
            error: None,
            loading: true,
            edit: Post::draft(),
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn edit(&self) -> &Post {
        &self.edit
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<Failure> {
        self.error
    }

    /// The error line as displayed; empty when there is no error.
    pub fn error_message(&self) -> &'static str {
        self.error.map(Failure::message).unwrap_or("")
    }

    pub fn find(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == Some(id))
    }

    pub fn apply(mut self, event: Event) -> Self {
        match event {
            // The initial fetch settles the state once; late outcomes are dropped.
            Event::FetchSucceeded(posts) if self.loading => {
                self.posts = posts;
                self.loading = false;
            }
            Event::FetchFailed(failure) if self.loading => {
                self.error = Some(failure);
                self.loading = false;
            }
            Event::FetchSucceeded(_) | Event::FetchFailed(_) => {}
            Event::TitleChanged(title) => self.edit.title = title,
            Event::BodyChanged(body) => self.edit.body = body,
            Event::EditSelected(post) => self.edit = post,
            Event::Updated(post) | Event::Created(post) => {
                if let Some(id) = post.id {
                    self.remove(id);
                }
                self.posts.push(post);
                self.edit = Post::draft();
                self.error = None;
            }
            Event::Deleted(id) => {
                self.remove(id);
                self.error = None;
            }
            Event::OperationFailed(failure) => self.error = Some(failure),
        }
        self
    }

    fn remove(&mut self, id: PostId) {
        self.posts.retain(|p| p.id != Some(id));
    }
}
