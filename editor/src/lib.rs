//! Host runtime for the post editor.
//!
//! # Overview
//! Executes the requests built by `post-core` over HTTP, owns the
//! cancellable initial fetch, and renders the editor state as text for the
//! command-line and interactive front-ends.
//!
//! # Design
//! - `Transport` is the only I/O seam; `HttpTransport` backs it with reqwest.
//! - `PostEditor` is the single component. All of its state lives in one
//!   `EditorState` that changes only through `EditorState::apply`.
//! - `FetchHandle` is created when the editor is mounted, before the fetch
//!   is sent, so a canceller can hold it from the start.

pub mod config;
pub mod editor;
pub mod error;
pub mod fetch;
pub mod interactive;
pub mod telemetry;
pub mod transport;
pub mod view;

pub use config::{CliArgs, Command, Settings};
pub use editor::{PostEditor, CANCEL_REASON, DEFAULT_FETCH_TIMEOUT};
pub use error::AppError;
pub use fetch::{FetchHandle, FetchPhase};
pub use transport::{HttpTransport, Transport, TransportError};
pub use view::render;
