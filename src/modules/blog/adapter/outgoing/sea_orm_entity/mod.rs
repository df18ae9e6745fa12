pub mod blogs;
pub mod comments;
