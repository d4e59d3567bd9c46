//! The small JSON bodies used to tell the client what happened.

use axum::{
    Json,
    extract::{
        Path,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// A one-line JSON response body.
///
/// Serializes as `{"message": "..."}` or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alert {
    /// An informational message, e.g. "Category deleted."
    Message(String),
    /// A description of why the request was refused.
    Error(String),
}

impl Alert {
    /// Create a message alert.
    pub fn message(text: impl Into<String>) -> Self {
        Self::Message(text.into())
    }

    /// Create an error alert.
    pub fn error(text: impl Into<String>) -> Self {
        Self::Error(text.into())
    }

    /// Respond with this alert and `status_code`.
    pub fn into_response_with(self, status_code: StatusCode) -> Response {
        (status_code, Json(self)).into_response()
    }
}

/// Unwrap a JSON request body, or build the 400 response for a body that is
/// not JSON or has fields of the wrong type.
pub fn parse_json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, Response> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            tracing::debug!("Could not parse request body: {rejection}");
            Err(Alert::error(rejection.body_text()).into_response_with(StatusCode::BAD_REQUEST))
        }
    }
}

/// The 404 response for a path that does not name a route or resource.
pub fn not_found() -> Response {
    Alert::message("Not found.").into_response_with(StatusCode::NOT_FOUND)
}

/// Unwrap a path parameter, or build the 404 response for a path whose ID is
/// not an integer that fits in an `i64`.
pub fn parse_path<T>(path: Result<Path<T>, PathRejection>) -> Result<T, Response> {
    match path {
        Ok(Path(value)) => Ok(value),
        Err(rejection) => {
            tracing::debug!("Could not parse path: {rejection}");
            Err(not_found())
        }
    }
}
