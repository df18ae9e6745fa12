// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Standard success envelope
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always 0 for successful responses
    #[schema(example = 0)]
    pub code: u16,
    #[schema(example = "success")]
    pub message: String,
    /// Response payload
    pub result: T,
}

/// Standard error envelope
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// 1000 internal, 1001 credentials, 1002 bad request, 1003 forbidden,
    /// 1004 storage, 1005 not found
    #[schema(example = 1002)]
    pub code: u16,

    #[schema(example = "invalid request parameters")]
    pub message: String,

    /// Per-field messages for validation failures, e.g. `{"email": ["Invalid email format"]}`
    #[schema(value_type = Option<Object>)]
    pub result: Option<serde_json::Value>,
}
