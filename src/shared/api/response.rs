// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

/// Numeric codes carried in every envelope. `0` is success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Internal,
    BadCredentials,
    BadRequest,
    Forbidden,
    Storage,
    NotFound,
}

impl ErrorCode {
    pub fn code(self) -> u16 {
        match self {
            ErrorCode::Internal => 1000,
            ErrorCode::BadCredentials => 1001,
            ErrorCode::BadRequest => 1002,
            ErrorCode::Forbidden => 1003,
            ErrorCode::Storage => 1004,
            ErrorCode::NotFound => 1005,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ErrorCode::Internal => "system error",
            ErrorCode::BadCredentials => "invalid account or password",
            ErrorCode::BadRequest => "invalid request parameters",
            ErrorCode::Forbidden => "permission denied",
            ErrorCode::Storage => "database error",
            ErrorCode::NotFound => "not found",
        }
    }
}

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(result: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            code: 0,
            message: "success".to_string(),
            result: Some(result),
        })
    }

    pub fn created(result: T) -> HttpResponse {
        HttpResponse::Created().json(ApiResponse {
            code: 0,
            message: "success".to_string(),
            result: Some(result),
        })
    }

    /// Error envelope with a payload, e.g. per-field validation messages.
    pub fn error_with(status: StatusCode, code: ErrorCode, result: T) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse {
            code: code.code(),
            message: code.message().to_string(),
            result: Some(result),
        })
    }
}

impl ApiResponse<()> {
    pub fn error(status: StatusCode, code: ErrorCode) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            code: code.code(),
            message: code.message().to_string(),
            result: None,
        })
    }

    /// 400 / 1002 with a human readable detail in `result`.
    pub fn bad_request(detail: &str) -> HttpResponse {
        ApiResponse::error_with(
            StatusCode::BAD_REQUEST,
            ErrorCode::BadRequest,
            serde_json::json!({ "detail": detail }),
        )
    }

    /// 400 / 1002 with the offending field named in `result`.
    pub fn invalid_field(field: &str, detail: &str) -> HttpResponse {
        let mut fields = serde_json::Map::new();
        fields.insert(field.to_string(), serde_json::json!([detail]));
        ApiResponse::error_with(
            StatusCode::BAD_REQUEST,
            ErrorCode::BadRequest,
            serde_json::Value::Object(fields),
        )
    }

    /// Wrong email/password at login.
    pub fn bad_credentials() -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, ErrorCode::BadCredentials)
    }

    /// Missing or unresolvable token on a route that requires login.
    pub fn unauthorized() -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, ErrorCode::BadCredentials)
    }

    /// Request understood but rejected for the current session (e.g. confirmation).
    pub fn rejected() -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, ErrorCode::BadRequest)
    }

    pub fn forbidden() -> HttpResponse {
        Self::error(StatusCode::FORBIDDEN, ErrorCode::Forbidden)
    }

    pub fn not_found() -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, ErrorCode::NotFound)
    }

    pub fn storage_error() -> HttpResponse {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::Storage)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::Internal)
    }
}
