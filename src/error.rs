//! Error Types
//!
//! Failures of remote-store calls and of user-initiated mutations.

use thiserror::Error;

use crate::validation::FieldErrors;

/// Message shown when the store rejects a duplicate email
pub const CONFLICT_MESSAGE: &str = "this email is already in use";

/// Remote store failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The store refused the write because the email is taken (HTTP 409)
    #[error("{}", CONFLICT_MESSAGE)]
    Conflict,
    /// Any other non-2xx status
    #[error("unexpected status {0}")]
    Status(u16),
    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),
    /// The response body could not be parsed
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, ApiError::Conflict)
    }

    /// Writes report a duplicate email as 409
    pub fn into_conflict(self) -> Self {
        match self {
            ApiError::Status(409) => ApiError::Conflict,
            other => other,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status(status.as_u16())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Why a create, save or delete did not go through
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    /// Local validation failed; nothing was sent
    #[error("invalid input: {0}")]
    Rejected(FieldErrors),
    #[error(transparent)]
    Api(#[from] ApiError),
    /// A request for the same form or record is already in flight
    #[error("another request is still in flight")]
    Busy,
    /// Save requested while the record is not being edited
    #[error("record is not being edited")]
    NotEditing,
    /// The record is no longer part of the snapshot
    #[error("user is no longer listed")]
    Vanished,
}

impl MutationError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, MutationError::Api(e) if e.is_conflict())
    }
}
