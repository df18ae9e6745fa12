pub mod password_hasher;
pub mod token_cache;
pub mod token_generator;
pub mod user_query;
pub mod user_repository;

pub use password_hasher::{HashError, PasswordHasher};
pub use token_cache::{TokenCache, TokenCacheError};
pub use token_generator::TokenGenerator;
pub use user_query::{UserQuery, UserQueryError, UserQueryResult};
pub use user_repository::{CreateUserData, UserRepository, UserRepositoryError, UserResult};
