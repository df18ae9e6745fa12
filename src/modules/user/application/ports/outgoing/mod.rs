pub mod follow_repository;
pub mod profile_query;
pub mod profile_repository;

pub use follow_repository::{FollowOutcome, FollowRepository, FollowRepositoryError};
pub use profile_query::{AuthorSummary, OwnProfileView, ProfileQuery, ProfileQueryError, ProfileView};
pub use profile_repository::{
    PatchProfileData, ProfileRepository, ProfileRepositoryError, MAX_GENDER,
};
