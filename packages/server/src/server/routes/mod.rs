// HTTP routes
pub mod comps;
pub mod health;
pub mod listings;

pub use comps::*;
pub use health::*;
pub use listings::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// `?q=` on the lookup routes.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    q: Option<String>,
}

impl SearchQuery {
    /// The trimmed query, or a 400 when it is missing or blank.
    pub fn required(&self) -> Result<&str, ApiError> {
        self.q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .ok_or(ApiError::MissingQuery)
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

/// Failures a handler turns into a JSON error response.
#[derive(Debug)]
pub enum ApiError {
    MissingQuery,
    Internal(::comps::CompsError),
}

impl From<::comps::CompsError> for ApiError {
    fn from(err: ::comps::CompsError) -> Self {
        ApiError::Internal(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::MissingQuery => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: "Missing query parameter q",
                    message: None,
                },
            ),
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "Lookup failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: "Internal Server Error",
                        message: Some(err.to_string()),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
