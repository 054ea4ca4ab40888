//! Common error type shared across the Pathlab crates.
//!
//! Authorization denials are not errors: they are expected decisions and
//! travel as values (see `pathlab-rbac`). This enum covers the
//! infrastructure failures around them.

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub type PlResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	NotFound,
	/// Missing or unverifiable credentials (maps to 401)
	Unauthorized,
	/// Authenticated but not allowed (maps to 403)
	PermissionDenied,
	ValidationError(String),
	/// Unexpected internal failure, never shown verbatim to the client
	Internal(String),
	DbError,

	// externals
	Io(std::io::Error),
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Error::NotFound => write!(f, "not found"),
			Error::Unauthorized => write!(f, "unauthorized"),
			Error::PermissionDenied => write!(f, "permission denied"),
			Error::ValidationError(msg) => write!(f, "validation error: {}", msg),
			Error::Internal(msg) => write!(f, "internal error: {}", msg),
			Error::DbError => write!(f, "database error"),
			Error::Io(err) => write!(f, "io error: {}", err),
		}
	}
}

impl std::error::Error for Error {}

impl IntoResponse for Error {
	fn into_response(self) -> axum::response::Response {
		let (status, error) = match &self {
			Error::NotFound => (StatusCode::NOT_FOUND, "not_found"),
			Error::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized"),
			Error::PermissionDenied => (StatusCode::FORBIDDEN, "permission_denied"),
			Error::ValidationError(_) => (StatusCode::BAD_REQUEST, "validation_error"),
			Error::Internal(_) | Error::DbError | Error::Io(_) => {
				(StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
			}
		};

		// Internal details stay in the logs
		let message = match &self {
			Error::Internal(_) | Error::DbError | Error::Io(_) => {
				tracing::error!(error = %self, "internal error");
				"internal server error".to_string()
			}
			other => other.to_string(),
		};

		let body = Json(json!({
			"success": false,
			"message": message,
			"error": error,
		}));

		(status, body).into_response()
	}
}


// vim: ts=4
