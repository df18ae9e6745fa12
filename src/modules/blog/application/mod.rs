pub mod blog_use_cases;
pub mod domain;
pub mod ports;
pub mod service;

pub use blog_use_cases::BlogUseCases;
