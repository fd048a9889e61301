use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("{message}")]
    BadRequest { message: String },

    #[error("invalid fields in the request body")]
    Validation { errors: Vec<FieldError> },

    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    Conflict { message: String },

    #[error("an error occurred with the database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("placeholder image fetch failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("an internal server error occurred: {0}")]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } | Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            // the wire contract reports duplicate favorites as 403, not 409
            Self::Conflict { .. } => StatusCode::FORBIDDEN,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

#[derive(Serialize)]
struct ValidationBody {
    code: u16,
    errors: Vec<FieldError>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = status.as_u16();
        match self {
            Self::Validation { errors } => {
                (status, Json(ValidationBody { code, errors })).into_response()
            }

            Self::Database(ref e) => {
                error!("database error: {:?}", e);
                let body = ErrorBody {
                    code,
                    message: "internal server error".to_string(),
                };
                (status, Json(body)).into_response()
            }

            Self::Internal(ref e) => {
                error!("internal error: {:?}", e);
                let body = ErrorBody {
                    code,
                    message: "internal server error".to_string(),
                };
                (status, Json(body)).into_response()
            }

            Self::Upstream(ref e) => {
                error!("placeholder image fetch failed: {:?}", e);
                let body = ErrorBody {
                    code,
                    message: "could not fetch the placeholder image".to_string(),
                };
                (status, Json(body)).into_response()
            }

            _ => {
                let body = ErrorBody {
                    code,
                    message: self.to_string(),
                };
                (status, Json(body)).into_response()
            }
        }
    }
}
