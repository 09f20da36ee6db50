use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::ApiResponse;

pub type AppResult<T> = Result<T, AppError>;

/// Invalid input to the page calculator. An out-of-range page number is not
/// an error: it is clamped into the valid range instead.
#[derive(Error, Debug)]
pub enum PaginationError {
    #[error("limit must be a positive integer, got {0}")]
    InvalidLimit(i64),

    #[error("total record count cannot be negative, got {0}")]
    InvalidTotal(i64),

    #[error("base url {url:?} is not a valid absolute url: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("base url {0:?} cannot carry a path and query")]
    OpaqueBaseUrl(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sea_orm::DbErr),

    #[error("Invalid pagination argument: {0}")]
    Pagination(#[from] PaginationError),

    #[error("Invalid query string: {0}")]
    InvalidQuery(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code, message) = match self {
            AppError::Pagination(err) => {
                log::warn!("Invalid pagination argument: {err}");
                (
                    actix_web::http::StatusCode::BAD_REQUEST,
                    "INVALID_ARGUMENT",
                    err.to_string(),
                )
            }
            AppError::InvalidQuery(msg) => {
                log::warn!("Invalid query string: {msg}");
                (
                    actix_web::http::StatusCode::BAD_REQUEST,
                    "INVALID_ARGUMENT",
                    msg.clone(),
                )
            }
            AppError::NotFound(msg) => (
                actix_web::http::StatusCode::NOT_FOUND,
                "NOT_FOUND",
                msg.clone(),
            ),
            AppError::DatabaseError(err) => {
                log::error!("Database error: {err}");
                (
                    actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "Database error".to_string(),
                )
            }
            AppError::IoError(err) => {
                log::error!("Failed to read data source: {err}");
                (
                    actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "DATA_SOURCE_ERROR",
                    "Customer data is unavailable".to_string(),
                )
            }
            _ => {
                log::error!("Internal error: {self}");
                (
                    actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal server error".to_string(),
                )
            }
        };

        HttpResponse::build(status_code).json(ApiResponse::error(error_code, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;

    #[actix_web::test]
    async fn test_pagination_error_maps_to_bad_request() {
        let err = AppError::from(PaginationError::InvalidLimit(0));
        let resp = err.error_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["code"], "INVALID_ARGUMENT");
        assert_eq!(
            json["error"]["message"],
            "limit must be a positive integer, got 0"
        );
    }

    #[actix_web::test]
    async fn test_not_found_keeps_message() {
        let resp = AppError::NotFound("Customer not found".to_string()).error_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "NOT_FOUND");
        assert_eq!(json["error"]["message"], "Customer not found");
    }

    #[actix_web::test]
    async fn test_invalid_query_maps_to_bad_request() {
        let resp = AppError::InvalidQuery("unknown variant `Huge`".to_string()).error_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["code"], "INVALID_ARGUMENT");
        assert_eq!(json["error"]["message"], "unknown variant `Huge`");
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let resp = AppError::ConfigError("missing DATABASE_URL".to_string()).error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
