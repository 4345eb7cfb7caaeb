//! Deterministic core of the post editor.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values for the
//! posts API without touching the network (host-does-IO pattern), and
//! advances the editor's state through a pure reducer.
//!
//! # Design
//! - `PostClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - `EditorState::apply` maps (state, event) to the next state; the host
//!   turns I/O outcomes into `Event`s and failures into `Failure`s.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod failure;
pub mod http;
pub mod state;
pub mod types;

pub use client::{PostClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use failure::Failure;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use state::{EditorState, Event};
pub use types::{NewPost, Post, PostId};
