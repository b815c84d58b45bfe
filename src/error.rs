use axum::{
    response::{IntoResponse, Response},
    Json,
    http::StatusCode,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorResponse {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("URL and keywords are required.")]
    MissingFields,

    #[error("Could not extract enough content.")]
    InsufficientContent,

    #[error("No previous request found. Generate first.")]
    NoPreviousRequest,

    #[error("Failed to fetch data: {0}")]
    FetchError(String),

    #[error("LLM processing error: {0}")]
    LlmError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::MissingFields
            | AppError::InsufficientContent
            | AppError::NoPreviousRequest => (StatusCode::BAD_REQUEST, self.to_string()),
            // Fetch failures surface as the same 400 as thin content.
            AppError::FetchError(msg) => {
                log::error!("Fetch error: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    AppError::InsufficientContent.to_string(),
                )
            }
            // Internals never leak to the caller, only to the log.
            AppError::LlmError(msg) | AppError::ConfigError(msg) | AppError::Internal(msg) => {
                log::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::FetchError(err.to_string())
    }
}

impl From<std::env::VarError> for AppError {
    fn from(err: std::env::VarError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn request_level_failures_map_to_400() {
        assert_eq!(status_of(AppError::MissingFields), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(AppError::InsufficientContent),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::NoPreviousRequest),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::FetchError("timed out".into())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn internal_failures_map_to_500() {
        assert_eq!(
            status_of(AppError::LlmError("quota".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(AppError::ConfigError("bad port".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(AppError::Internal("oops".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn error_body_is_a_fixed_json_object() {
        let response = AppError::MissingFields.into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(
            bytes.as_ref(),
            br#"{"error":"URL and keywords are required."}"#
        );
    }

    #[tokio::test]
    async fn internal_detail_never_reaches_the_body() {
        let response = AppError::Internal("secret detail".into()).into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(bytes.as_ref(), br#"{"error":"Internal Server Error"}"#);
    }
}
