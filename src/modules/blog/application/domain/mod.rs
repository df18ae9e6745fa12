pub mod content;
pub mod ownership;
