pub mod ports;
pub mod service;
pub mod user_use_cases;

pub use user_use_cases::UserUseCases;
