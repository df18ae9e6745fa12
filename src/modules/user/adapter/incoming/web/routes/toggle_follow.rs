use actix_web::{post, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::modules::user::application::ports::incoming::use_cases::ToggleFollowError;
use crate::modules::user::application::ports::outgoing::FollowOutcome;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Follow or unfollow a user
///
/// Flips the follow edge and moves both counters in one transaction.
#[utoipa::path(
    post,
    path = "/follow/{user_id}",
    tag = "user",
    security(("token" = [])),
    params(("user_id" = i32, Path, description = "User to follow or unfollow")),
    responses(
        (
            status = 200,
            description = "New state of the edge",
            body = inline(SuccessResponse<FollowOutcome>),
            example = json!({ "code": 0, "message": "success", "result": "Followed" })
        ),
        (status = 400, description = "Self-follow", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 404, description = "No such user", body = ErrorResponse),
        (status = 500, description = "Transaction rolled back or storage failure", body = ErrorResponse),
    )
)]
#[post("/follow/{user_id}")]
pub async fn toggle_follow_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let target = UserId::from(path.into_inner());

    match data.user.toggle_follow.execute(user.user_id, target).await {
        Ok(outcome) => ApiResponse::success(outcome),

        Err(ToggleFollowError::SelfFollow) => {
            warn!(user_id = %user.user_id, "Self-follow rejected");
            ApiResponse::bad_request("Users cannot follow themselves")
        }

        Err(ToggleFollowError::TargetNotFound) => ApiResponse::not_found(),

        Err(ToggleFollowError::TransactionFailed(e)) => {
            error!(follower = %user.user_id, followed = %target, error = %e, "Follow toggle rolled back");
            ApiResponse::internal_error()
        }

        Err(ToggleFollowError::QueryError(e)) => {
            error!(follower = %user.user_id, followed = %target, error = %e, "Follow target lookup failed");
            ApiResponse::storage_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::{session_user, StubResolveSession, VALID_TOKEN};
    use crate::tests::support::user_fakes::{sample_profile, user_use_cases, InMemoryProfiles};
    use actix_web::{test, App};

    fn alice_and_bob() -> InMemoryProfiles {
        InMemoryProfiles::default()
            .with_user(sample_profile(1, "alice"), "alice@example.com")
            .with_user(sample_profile(2, "bob"), "bob@example.com")
    }

    async fn follow(profiles: &InMemoryProfiles, target: i32) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_resolve_session(StubResolveSession::found(session_user(1)))
            .with_user(user_use_cases(profiles.clone()))
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(toggle_follow_handler))
                .await;

        let req = test::TestRequest::post()
            .uri(&format!("/follow/{target}"))
            .insert_header(("Authorization", format!("TOKEN {VALID_TOKEN}")))
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_follow_twice_restores_counters() {
        let profiles = alice_and_bob();

        let (status, body) = follow(&profiles, 2).await;
        assert_eq!(status, 200);
        assert_eq!(body["result"], "Followed");
        assert_eq!(profiles.profile(UserId::from(1)).unwrap().follow_value, 1);
        assert_eq!(profiles.profile(UserId::from(2)).unwrap().followed_value, 1);

        let (status, body) = follow(&profiles, 2).await;
        assert_eq!(status, 200);
        assert_eq!(body["result"], "Unfollowed");
        assert_eq!(profiles.profile(UserId::from(1)).unwrap().follow_value, 0);
        assert_eq!(profiles.profile(UserId::from(2)).unwrap().followed_value, 0);
        assert!(!profiles.has_edge(UserId::from(1), UserId::from(2)));
    }

    #[actix_web::test]
    async fn test_follow_self_rejected() {
        let (status, body) = follow(&alice_and_bob(), 1).await;

        assert_eq!(status, 400);
        assert_eq!(body["code"], 1002);
    }

    #[actix_web::test]
    async fn test_follow_unknown_target() {
        let (status, body) = follow(&alice_and_bob(), 99).await;

        assert_eq!(status, 404);
        assert_eq!(body["code"], 1005);
    }

    #[actix_web::test]
    async fn test_follow_rollback_reports_internal_error() {
        let profiles = alice_and_bob();
        profiles.fail_next_toggle();

        let (status, body) = follow(&profiles, 2).await;

        assert_eq!(status, 500);
        assert_eq!(body["code"], 1000);
        assert_eq!(profiles.profile(UserId::from(2)).unwrap().followed_value, 0);
    }
}
