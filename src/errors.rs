//! Error handling for the search API.
//!
//! Every error maps to an HTTP status code and a sanitized, user-facing
//! message. Database errors are logged through `tracing` server-side and
//! never forwarded to clients.
//!
//! The two search-specific variants carry the messages the API has always
//! produced: an allow-list miss answers with
//! `Wrong URL Format: Property {name} not found!` and a failed join-column
//! resolution with `Invalid join column`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;
use std::fmt;

/// API error type with automatic logging and sanitized responses.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request - search clause referenced a field outside the
    /// resource's allow-list.
    InvalidField {
        /// Raw field name as supplied by the caller.
        name: String,
    },

    /// 404 Not Found - a sub-resource listing could not be scoped because
    /// the join column is unknown or its value unusable.
    InvalidJoinColumn {
        /// Relation name as supplied by the caller.
        name: String,
    },

    /// 404 Not Found - resource doesn't exist.
    NotFound {
        /// Resource type (e.g. "store", "inventory").
        resource: String,
        /// Optional identifier that wasn't found.
        id: Option<String>,
    },

    /// 400 Bad Request - invalid input from the caller.
    BadRequest {
        /// User-facing error message.
        message: String,
    },

    /// 500 Internal Server Error - database error (details logged, not exposed).
    Database {
        /// User-facing generic message.
        message: String,
        /// Internal error (logged, not sent to the caller).
        internal: DbErr,
    },

    /// 500 Internal Server Error - generic internal error.
    Internal {
        /// User-facing generic message.
        message: String,
        /// Internal error details (logged, not sent to the caller).
        internal: Option<String>,
    },
}

impl ApiError {
    /// Search clause named a field the resource does not allow.
    pub fn invalid_field(name: impl Into<String>) -> Self {
        Self::InvalidField { name: name.into() }
    }

    /// Join-column resolution failed for a sub-resource listing.
    pub fn invalid_join_column(name: impl Into<String>) -> Self {
        Self::InvalidJoinColumn { name: name.into() }
    }

    pub fn not_found(resource: impl Into<String>, id: Option<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Wrap a database error. The `DbErr` is logged but not sent to the user.
    pub fn database(err: DbErr) -> Self {
        Self::Database {
            message: "A database error occurred".to_string(),
            internal: err,
        }
    }

    pub fn internal(message: impl Into<String>, internal: Option<String>) -> Self {
        Self::Internal {
            message: message.into(),
            internal,
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidField { .. } | Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::InvalidJoinColumn { .. } | Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database { .. } | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// User-facing error message (sanitized).
    fn user_message(&self) -> String {
        match self {
            Self::InvalidField { name } => {
                format!("Wrong URL Format: Property {name} not found!")
            }
            Self::InvalidJoinColumn { .. } => "Invalid join column".to_string(),
            Self::NotFound { resource, id } => {
                if let Some(id) = id {
                    format!("{resource} with ID '{id}' not found")
                } else {
                    format!("{resource} not found")
                }
            }
            Self::BadRequest { message }
            | Self::Database { message, .. }
            | Self::Internal { message, .. } => message.clone(),
        }
    }

    /// Log internal error details (not sent to the caller). Only produces
    /// output when the application has set up a tracing subscriber.
    fn log_internal(&self) {
        match self {
            Self::Database { internal, .. } => {
                tracing::error!(error = ?internal, "Database error occurred");
            }
            Self::Internal {
                internal: Some(details),
                ..
            } => {
                tracing::error!(details = %details, "Internal error occurred");
            }
            Self::InvalidJoinColumn { name } => {
                tracing::debug!(join_column = %name, "Join column resolution failed");
            }
            _ => {
                tracing::debug!(
                    error = %self.user_message(),
                    status = %self.status_code(),
                    "API error"
                );
            }
        }
    }
}

/// Error response sent to callers (sanitized).
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log_internal();

        let status = self.status_code();
        let response = ErrorResponse {
            error: self.user_message(),
        };

        (status, Json(response)).into_response()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl std::error::Error for ApiError {}

/// `DbErr::RecordNotFound` becomes 404; everything else is a sanitized 500.
impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        match &err {
            DbErr::RecordNotFound(msg) => {
                let resource = msg.split_whitespace().next().unwrap_or("Resource");
                Self::NotFound {
                    resource: resource.to_string(),
                    id: None,
                }
            }
            _ => Self::Database {
                message: "A database error occurred".to_string(),
                internal: err,
            },
        }
    }
}
