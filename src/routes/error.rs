use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse, ResponseError};
use thiserror::Error;
use validator::ValidationErrors;

use crate::core::MatchError;
use crate::models::ErrorResponse;
use crate::services::StoreError;

/// Errors returned by HTTP handlers, rendered as JSON `ErrorResponse` bodies
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{message}")]
    NotFound {
        message: String,
        details: Option<String>,
    },

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound {
            message: message.into(),
            details: None,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::Unauthorized(_) => "unauthorized",
            ApiError::Forbidden(_) => "forbidden",
            ApiError::NotFound { .. } => "not_found",
            ApiError::Validation(_) => "validation_error",
            ApiError::Internal(_) => "internal_error",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let details = match self {
            ApiError::NotFound { details, .. } => details.clone(),
            _ => None,
        };

        HttpResponse::build(status).json(ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
            status_code: status.as_u16(),
            details,
        })
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(what) => ApiError::not_found(format!("Not found: {}", what)),
            StoreError::Conflict(message) => ApiError::BadRequest(message),
        }
    }
}

impl From<MatchError> for ApiError {
    fn from(err: MatchError) -> Self {
        match err {
            MatchError::InvalidInput(reason) => {
                tracing::debug!("Recommendation request rejected: {}", reason);
                ApiError::NotFound {
                    message: "User preferences not found".to_string(),
                    details: Some(
                        "Please complete your profile to get personalized recommendations"
                            .to_string(),
                    ),
                }
            }
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors.to_string())
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError::BadRequest(format!("Invalid JSON: {}", err)).into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest(format!("Invalid query: {}", err)).into()
}

/// Handle malformed path ids
pub fn handle_path_error(err: error::PathError, req: &HttpRequest) -> actix_web::Error {
    tracing::debug!("Path error on {}: {}", req.path(), err);
    ApiError::BadRequest("Invalid ID format".to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::BadRequest("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::Unauthorized("x".into()).status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::Forbidden("x".into()).status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::Validation("x".into()).status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_store_error_mapping() {
        let err: ApiError = StoreError::Conflict("Dog already in favorites".into()).into();
        assert!(matches!(err, ApiError::BadRequest(ref m) if m == "Dog already in favorites"));

        let err: ApiError = StoreError::NotFound("dog 3".into()).into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_missing_preferences_body() {
        let err: ApiError = MatchError::InvalidInput("no profile".into()).into();
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "User preferences not found");
        assert_eq!(json["status_code"], 404);
        assert!(json["details"].is_string());
    }
}
