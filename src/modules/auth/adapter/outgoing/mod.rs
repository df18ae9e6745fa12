pub mod random_token_generator;
pub mod sea_orm_entity;
pub mod security;
pub mod token_cache_redis;
pub mod user_query_postgres;
pub mod user_repository_postgres;

pub use random_token_generator::RandomTokenGenerator;
pub use security::Argon2Hasher;
pub use token_cache_redis::RedisTokenCache;
pub use user_query_postgres::UserQueryPostgres;
pub use user_repository_postgres::UserRepositoryPostgres;
