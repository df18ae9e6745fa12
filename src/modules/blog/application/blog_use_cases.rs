use std::sync::Arc;

use crate::modules::blog::application::ports::incoming::use_cases::{
    CreateBlogUseCase, CreateCommentUseCase, DeleteBlogUseCase, DeleteCommentUseCase,
    GetBlogUseCase, ListBlogsUseCase, ListCommentsUseCase, PatchBlogUseCase,
};

#[derive(Clone)]
pub struct BlogUseCases {
    pub create: Arc<dyn CreateBlogUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetBlogUseCase + Send + Sync>,
    pub get_list: Arc<dyn ListBlogsUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchBlogUseCase + Send + Sync>,
    pub soft_delete: Arc<dyn DeleteBlogUseCase + Send + Sync>,
    pub create_comment: Arc<dyn CreateCommentUseCase + Send + Sync>,
    pub get_comments: Arc<dyn ListCommentsUseCase + Send + Sync>,
    pub soft_delete_comment: Arc<dyn DeleteCommentUseCase + Send + Sync>,
}
