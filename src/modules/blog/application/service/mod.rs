mod create_blog_service;
mod create_comment_service;
mod delete_blog_service;
mod delete_comment_service;
mod get_blog_service;
mod list_blogs_service;
mod list_comments_service;
mod patch_blog_service;

pub use create_blog_service::CreateBlogService;
pub use create_comment_service::CreateCommentService;
pub use delete_blog_service::DeleteBlogService;
pub use delete_comment_service::DeleteCommentService;
pub use get_blog_service::GetBlogService;
pub use list_blogs_service::ListBlogsService;
pub use list_comments_service::ListCommentsService;
pub use patch_blog_service::PatchBlogService;
