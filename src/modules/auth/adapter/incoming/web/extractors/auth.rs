use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use tracing::error;

use crate::auth::application::domain::entities::{is_well_formed_token, UserId};
use crate::shared::api::ApiResponse;
use crate::AppState;

const AUTH_SCHEME: &str = "token";

/// The caller behind a live session token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub email: String,
    pub username: String,
    /// The raw bearer token, needed by idempotent login
    pub token: String,
}

/// Optional authentication: never rejects for a missing or unknown token.
#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<AuthenticatedUser>);

impl MaybeAuthenticated {
    pub fn user(&self) -> Option<&AuthenticatedUser> {
        self.0.as_ref()
    }
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

/// `Authorization: TOKEN <token>`, scheme case-insensitive. Anything else is
/// treated as no header at all.
fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    let raw = req.headers().get("Authorization")?.to_str().ok()?;
    let (scheme, token) = raw.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case(AUTH_SCHEME) {
        return None;
    }

    let token = token.trim();
    is_well_formed_token(token).then(|| token.to_string())
}

async fn resolve_user(req: &HttpRequest) -> Result<Option<AuthenticatedUser>, ActixError> {
    let Some(token) = extract_token_from_header(req) else {
        return Ok(None);
    };

    let Some(data) = req.app_data::<web::Data<AppState>>() else {
        error!("AppState missing from app data");
        return Err(create_api_error(ApiResponse::internal_error()));
    };

    match data.resolve_session_use_case.execute(&token).await {
        Ok(user) => Ok(user.map(|u| AuthenticatedUser {
            user_id: u.id,
            email: u.email,
            username: u.username,
            token,
        })),
        Err(e) => {
            error!(error = %e, "Session lookup failed");
            Err(create_api_error(ApiResponse::internal_error()))
        }
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            resolve_user(&req)
                .await?
                .ok_or_else(|| create_api_error(ApiResponse::unauthorized()))
        })
    }
}

impl FromRequest for MaybeAuthenticated {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move { resolve_user(&req).await.map(MaybeAuthenticated) })
    }
}
