pub mod blog_query;
pub mod blog_repository;
pub mod comment_repository;

pub use blog_query::{
    BlogQuery, BlogQueryError, BlogSortField, BlogView, CommentSortField, CommentView,
};
pub use blog_repository::{
    BlogRecord, BlogRepository, BlogRepositoryError, CreateBlogData, PatchBlogData,
};
pub use comment_repository::{
    CommentRecord, CommentRepository, CommentRepositoryError, CreateCommentData,
};
