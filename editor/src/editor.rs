//! The post editor runtime.
//!
//! # Design
//! `PostEditor` pairs the deterministic core with a `Transport`. Every
//! operation builds a request with `PostClient`, executes it, parses the
//! response and feeds the outcome to `EditorState::apply`. The only
//! cancellable operation is the initial fetch, guarded by a `FetchHandle`
//! created at construction time so a canceller can hold it before the
//! request is sent.

use std::time::Duration;

use post_core::{
    ApiError, EditorState, Event, Failure, HttpResponse, NewPost, Post, PostClient, PostId,
};
use tracing::{debug, info, instrument, warn};

use crate::fetch::FetchHandle;
use crate::transport::{Transport, TransportError};

/// Reason handed to the fetch handle by [`PostEditor::cancel`].
pub const CANCEL_REASON: &str = "User cancelled operation";

/// Upper bound for the initial fetch unless configured otherwise.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_millis(5000);

pub struct PostEditor<T> {
    client: PostClient,
    transport: T,
    fetch_timeout: Duration,
    fetch: FetchHandle,
    state: EditorState,
}

impl<T: Transport> PostEditor<T> {
    /// Mount the editor: loading state, blank buffer, pending fetch handle.
    pub fn new(client: PostClient, transport: T) -> Self {
        Self {
            client,
            transport,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            fetch: FetchHandle::new(),
            state: EditorState::mounted(),
        }
    }

    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// A handle another task can use to cancel the initial fetch.
    pub fn cancel_handle(&self) -> FetchHandle {
        self.fetch.clone()
    }

    /// Run the initial fetch. Does nothing once the fetch has settled.
    #[instrument(skip_all, fields(base_url = %self.client.base_url()))]
    pub async fn load(&mut self) {
        if !self.state.is_loading() {
            return;
        }

        let request = self.client.build_list_posts();
        let handle = self.fetch.clone();
        let round_trip = tokio::select! {
            biased;
            _ = handle.cancelled() => None,
            result = self.transport.execute(request, Some(self.fetch_timeout)) => Some(result),
        };

        // A cancellation that lands after the response still wins.
        let cancelled = !handle.settle();
        let outcome = resolve(cancelled, round_trip, |response| {
            self.client.parse_list_posts(response)
        });

        let event = match outcome {
            Ok(posts) => {
                info!(count = posts.len(), "posts loaded");
                Event::FetchSucceeded(posts)
            }
            Err(failure) => {
                warn!(%failure, reason = ?handle.reason(), "initial fetch failed");
                Event::FetchFailed(failure)
            }
        };
        self.dispatch(event);
    }

    /// Cancel the initial fetch. No-op once it has settled.
    pub fn cancel(&self) -> bool {
        self.fetch.cancel(CANCEL_REASON)
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.dispatch(Event::TitleChanged(title.into()));
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.dispatch(Event::BodyChanged(body.into()));
    }

    /// Copy the post with `id` into the edit buffer. Returns false if the
    /// list has no such post.
    pub fn select_for_update(&mut self, id: PostId) -> bool {
        match self.state.find(id).cloned() {
            Some(post) => {
                self.dispatch(Event::EditSelected(post));
                true
            }
            None => false,
        }
    }

    /// Save the edit buffer: update when it carries an id, create otherwise.
    #[instrument(skip_all, fields(id = ?self.state.edit().id))]
    pub async fn save(&mut self) -> Result<(), Failure> {
        let buffer = self.state.edit().clone();
        let result = match buffer.id {
            Some(id) => self.update(buffer).await.map(|()| id),
            None => self.create(NewPost::from(&buffer)).await,
        };
        self.settle_operation("save", result).map(|_| ())
    }

    async fn update(&mut self, post: Post) -> Result<(), Failure> {
        let request = self.client.build_update_post(&post)?;
        let round_trip = self.transport.execute(request, None).await;
        resolve(false, Some(round_trip), |response| {
            self.client.parse_update_post(response)
        })?;
        self.dispatch(Event::Updated(post));
        Ok(())
    }

    async fn create(&mut self, input: NewPost) -> Result<PostId, Failure> {
        let request = self.client.build_create_post(&input)?;
        let round_trip = self.transport.execute(request, None).await;
        let created = resolve(false, Some(round_trip), |response| {
            self.client.parse_create_post(response)
        })?;
        let id = created.id.ok_or(Failure::Unexpected)?;
        self.dispatch(Event::Created(created));
        Ok(id)
    }

    /// Delete the post with `id` and drop it from the list on success.
    #[instrument(skip(self))]
    pub async fn delete(&mut self, id: PostId) -> Result<(), Failure> {
        let request = self.client.build_delete_post(id);
        let round_trip = self.transport.execute(request, None).await;
        let result = resolve(false, Some(round_trip), |response| {
            self.client.parse_delete_post(response)
        });
        if result.is_ok() {
            self.dispatch(Event::Deleted(id));
        }
        self.settle_operation("delete", result.map(|()| id)).map(|_| ())
    }

    fn settle_operation(
        &mut self,
        operation: &'static str,
        result: Result<PostId, Failure>,
    ) -> Result<PostId, Failure> {
        match result {
            Ok(id) => info!(operation, id, "operation succeeded"),
            Err(failure) => {
                warn!(operation, %failure, "operation failed");
                self.dispatch(Event::OperationFailed(failure));
            }
        }
        result
    }

    fn dispatch(&mut self, event: Event) {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(event);
    }
}

/// Turn a round-trip into the parsed value or a classified failure.
///
/// `round_trip` is `None` when the request was abandoned before any outcome.
/// A parse rejection keeps the response status so a 404 reads as not found.
fn resolve<V>(
    cancelled: bool,
    round_trip: Option<Result<HttpResponse, TransportError>>,
    parse: impl FnOnce(HttpResponse) -> Result<V, ApiError>,
) -> Result<V, Failure> {
    let (timed_out, status, value) = match round_trip {
        None => (false, None, None),
        Some(Err(err)) => {
            debug!(error = %err, "transport error");
            (err.timed_out(), err.status(), None)
        }
        Some(Ok(response)) => {
            let status = response.status;
            match parse(response) {
                Ok(value) => (false, Some(status), Some(value)),
                Err(err) => {
                    debug!(error = %err, status, "response rejected");
                    (false, Some(status), None)
                }
            }
        }
    };

    match value {
        Some(value) if !cancelled => Ok(value),
        _ => Err(Failure::classify(cancelled, timed_out, status)),
    }
}
