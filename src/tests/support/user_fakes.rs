//! In-memory stand-in for the profile and follow ports.

use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use crate::auth::application::domain::entities::UserId;
use crate::modules::user::application::service::{
    GetMyInfoService, GetUserInfoService, PatchMyInfoService, ToggleFollowService,
};
use crate::modules::user::application::UserUseCases;
use crate::modules::user::application::ports::outgoing::{
    FollowOutcome, FollowRepository, FollowRepositoryError, OwnProfileView, PatchProfileData,
    ProfileQuery, ProfileQueryError, ProfileRepository, ProfileRepositoryError, ProfileView,
};

pub fn sample_profile(id: i32, username: &str) -> ProfileView {
    ProfileView {
        id: UserId::from(id),
        username: username.to_string(),
        gender: 0,
        follow_value: 0,
        followed_value: 0,
        create_time: Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
        last_login_time: None,
    }
}

#[derive(Default)]
struct State {
    users: BTreeMap<UserId, (ProfileView, String)>,
    edges: HashSet<(UserId, UserId)>,
    failing: bool,
    fail_next_toggle: bool,
}

/// Shared handle; clones see the same users and edges.
#[derive(Clone, Default)]
pub struct InMemoryProfiles {
    state: Arc<Mutex<State>>,
}

impl InMemoryProfiles {
    pub fn failing() -> Self {
        let profiles = Self::default();
        profiles.state.lock().unwrap().failing = true;
        profiles
    }

    pub fn with_user(self, profile: ProfileView, email: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .users
            .insert(profile.id, (profile, email.to_string()));
        self
    }

    pub fn profile(&self, user_id: UserId) -> Option<ProfileView> {
        self.state
            .lock()
            .unwrap()
            .users
            .get(&user_id)
            .map(|(p, _)| p.clone())
    }

    pub fn has_edge(&self, follower: UserId, followed: UserId) -> bool {
        self.state
            .lock()
            .unwrap()
            .edges
            .contains(&(follower, followed))
    }

    /// The next toggle fails as if the transaction had been rolled back.
    pub fn fail_next_toggle(&self) {
        self.state.lock().unwrap().fail_next_toggle = true;
    }
}

#[async_trait]
impl ProfileQuery for InMemoryProfiles {
    async fn find_profile(
        &self,
        user_id: UserId,
    ) -> Result<Option<ProfileView>, ProfileQueryError> {
        Ok(self.find_own_profile(user_id).await?.map(|own| own.profile))
    }

    async fn find_own_profile(
        &self,
        user_id: UserId,
    ) -> Result<Option<OwnProfileView>, ProfileQueryError> {
        let state = self.state.lock().unwrap();
        if state.failing {
            return Err(ProfileQueryError::DatabaseError("db down".to_string()));
        }
        Ok(state
            .users
            .get(&user_id)
            .map(|(profile, email)| OwnProfileView {
                profile: profile.clone(),
                email: email.clone(),
            }))
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfiles {
    async fn patch_profile(
        &self,
        user_id: UserId,
        data: PatchProfileData,
    ) -> Result<(), ProfileRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if state.failing {
            return Err(ProfileRepositoryError::DatabaseError("db down".to_string()));
        }
        let (profile, _) = state
            .users
            .get_mut(&user_id)
            .ok_or(ProfileRepositoryError::NotFound)?;

        if let Some(username) = data.username {
            profile.username = username;
        }
        if let Some(gender) = data.gender {
            profile.gender = gender;
        }
        Ok(())
    }
}

#[async_trait]
impl FollowRepository for InMemoryProfiles {
    async fn toggle(
        &self,
        follower: UserId,
        followed: UserId,
    ) -> Result<FollowOutcome, FollowRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if std::mem::take(&mut state.fail_next_toggle) || state.failing {
            return Err(FollowRepositoryError::DatabaseError("rolled back".to_string()));
        }

        let (outcome, delta) = if state.edges.remove(&(follower, followed)) {
            (FollowOutcome::Unfollowed, -1)
        } else {
            state.edges.insert((follower, followed));
            (FollowOutcome::Followed, 1)
        };

        if let Some((profile, _)) = state.users.get_mut(&follower) {
            profile.follow_value += delta;
        }
        if let Some((profile, _)) = state.users.get_mut(&followed) {
            profile.followed_value += delta;
        }
        Ok(outcome)
    }
}

/// The real user services wired over one shared in-memory store.
pub fn user_use_cases(profiles: InMemoryProfiles) -> UserUseCases {
    UserUseCases {
        get_info: Arc::new(GetUserInfoService::new(profiles.clone())),
        get_my_info: Arc::new(GetMyInfoService::new(profiles.clone())),
        patch_my_info: Arc::new(PatchMyInfoService::new(profiles.clone(), profiles.clone())),
        toggle_follow: Arc::new(ToggleFollowService::new(profiles.clone(), profiles)),
    }
}
