//! User-visible failure taxonomy for remote operations.
//!
//! # Design
//! Every remote operation that fails ends up as exactly one `Failure`.
//! Hosts classify transport-level outcomes (cancellation, timeout, missing
//! response) themselves; anything that produced a response is classified
//! from the `ApiError` the parser returned.

use std::fmt;

use crate::error::ApiError;

/// Why a remote operation did not succeed, as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// The operation was cancelled before it settled.
    Cancelled,
    /// No response arrived within the time bound.
    Timeout,
    /// The remote resource answered 404.
    NotFound,
    /// The request never produced a response (connection refused, DNS, ...).
    NoResponse,
    /// Anything else, including bad statuses and malformed bodies.
    Unexpected,
}

impl Failure {
    pub fn message(self) -> &'static str {
        match self {
            Failure::Cancelled => "Request cancelled",
            Failure::Timeout => "A timeout has occurred",
            Failure::NotFound => "Resource not found",
            Failure::NoResponse => "No response was received",
            Failure::Unexpected => "An unexpected error has occurred",
        }
    }

    /// Classify a rejection from its observable traits, in priority order:
    /// cancellation, timeout, HTTP 404, missing response, anything else.
    pub fn classify(cancelled: bool, timed_out: bool, status: Option<u16>) -> Self {
        if cancelled {
            Failure::Cancelled
        } else if timed_out {
            Failure::Timeout
        } else {
            match status {
                Some(404) => Failure::NotFound,
                Some(_) => Failure::Unexpected,
                None => Failure::NoResponse,
            }
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl From<&ApiError> for Failure {
    fn from(err: &ApiError) -> Self {
        match err {
            ApiError::NotFound => Failure::NotFound,
            _ => Failure::Unexpected,
        }
    }
}

impl From<ApiError> for Failure {
    fn from(err: ApiError) -> Self {
        Failure::from(&err)
    }
}
