mod create_blog;
mod create_comment;
mod delete_blog;
mod delete_comment;
mod get_blog;
mod list_blogs;
mod list_comments;
mod patch_blog;

pub use create_blog::{CreateBlogError, CreateBlogUseCase};
pub use create_comment::{CreateCommentError, CreateCommentUseCase};
pub use delete_blog::{DeleteBlogError, DeleteBlogUseCase};
pub use delete_comment::{DeleteCommentError, DeleteCommentUseCase};
pub use get_blog::{GetBlogError, GetBlogUseCase};
pub use list_blogs::{ListBlogsError, ListBlogsUseCase};
pub use list_comments::{ListCommentsError, ListCommentsUseCase};
pub use patch_blog::{PatchBlogError, PatchBlogUseCase};
