mod create_blog;
mod create_comment;
mod delete_blog;
mod delete_comment;
mod get_blog;
mod get_blogs;
mod get_comments;
mod patch_blog;

pub use create_blog::{__path_create_blog_handler, create_blog_handler};
pub use create_comment::{__path_create_comment_handler, create_comment_handler};
pub use delete_blog::{__path_delete_blog_handler, delete_blog_handler};
pub use delete_comment::{__path_delete_comment_handler, delete_comment_handler};
pub use get_blog::{__path_get_blog_handler, get_blog_handler};
pub use get_blogs::{
    __path_get_blogs_handler, __path_get_user_blogs_handler, get_blogs_handler,
    get_user_blogs_handler,
};
pub use get_comments::{__path_get_comments_handler, get_comments_handler};
pub use patch_blog::{__path_patch_blog_handler, patch_blog_handler};
