//! In-memory blogs and comments, with authors resolved from [`InMemoryProfiles`].

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::auth::application::domain::entities::UserId;
use crate::modules::blog::application::ports::outgoing::{
    BlogQuery, BlogQueryError, BlogRecord, BlogRepository, BlogRepositoryError, BlogSortField,
    BlogView, CommentRecord, CommentRepository, CommentRepositoryError, CommentSortField,
    CommentView, CreateBlogData, PatchBlogData,
};
use crate::modules::blog::application::service::{
    CreateBlogService, CreateCommentService, DeleteBlogService, DeleteCommentService,
    GetBlogService, ListBlogsService, ListCommentsService, PatchBlogService,
};
use crate::modules::blog::application::BlogUseCases;
use crate::modules::user::application::ports::outgoing::{AuthorSummary, ProfileQuery};
use crate::shared::pagination::{ListQuery, PageRequest, PageResult};
use crate::tests::support::user_fakes::{sample_profile, InMemoryProfiles};

#[derive(Debug, Clone)]
struct BlogRow {
    id: i32,
    author: UserId,
    title: String,
    content: String,
    like_value: i32,
    is_delete: bool,
    create_time: DateTime<Utc>,
    last_update_time: DateTime<Utc>,
}

#[derive(Debug, Clone)]
struct CommentRow {
    id: i32,
    author: UserId,
    blog_id: i32,
    content: String,
    like_value: i32,
    is_delete: bool,
    create_time: DateTime<Utc>,
}

#[derive(Default)]
struct State {
    blogs: BTreeMap<i32, BlogRow>,
    comments: BTreeMap<i32, CommentRow>,
    failing: bool,
}

/// Rows are created one minute apart so `create_time` order equals id order.
fn stamp(id: i32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap() + Duration::minutes(i64::from(id))
}

fn page_of<T: Clone>(rows: Vec<T>, page: PageRequest) -> PageResult<T> {
    let total = rows.len() as u64;
    let items = rows
        .into_iter()
        .skip(page.offset() as usize)
        .take(page.count as usize)
        .collect();
    PageResult::new(items, page, total)
}

#[derive(Clone, Default)]
pub struct InMemoryBlogs {
    state: Arc<Mutex<State>>,
    profiles: InMemoryProfiles,
}

impl InMemoryBlogs {
    pub fn new(profiles: InMemoryProfiles) -> Self {
        Self {
            state: Arc::default(),
            profiles,
        }
    }

    pub fn failing() -> Self {
        let blogs = Self::default();
        blogs.state.lock().unwrap().failing = true;
        blogs
    }

    /// Inserts a live blog and returns its id.
    pub fn seed_blog(&self, author: i32, title: &str) -> i32 {
        let mut state = self.state.lock().unwrap();
        let id = state.blogs.len() as i32 + 1;
        state.blogs.insert(
            id,
            BlogRow {
                id,
                author: UserId::from(author),
                title: title.to_string(),
                content: format!("content of {title}"),
                like_value: 0,
                is_delete: false,
                create_time: stamp(id),
                last_update_time: stamp(id),
            },
        );
        id
    }

    pub fn seed_comment(&self, author: i32, blog_id: i32, content: &str) -> i32 {
        let mut state = self.state.lock().unwrap();
        let id = state.comments.len() as i32 + 1;
        state.comments.insert(
            id,
            CommentRow {
                id,
                author: UserId::from(author),
                blog_id,
                content: content.to_string(),
                like_value: 0,
                is_delete: false,
                create_time: stamp(id),
            },
        );
        id
    }

    pub fn set_like_value(&self, blog_id: i32, like_value: i32) {
        if let Some(row) = self.state.lock().unwrap().blogs.get_mut(&blog_id) {
            row.like_value = like_value;
        }
    }

    pub fn is_blog_deleted(&self, blog_id: i32) -> bool {
        self.state
            .lock()
            .unwrap()
            .blogs
            .get(&blog_id)
            .is_some_and(|row| row.is_delete)
    }

    pub fn is_comment_deleted(&self, comment_id: i32) -> bool {
        self.state
            .lock()
            .unwrap()
            .comments
            .get(&comment_id)
            .is_some_and(|row| row.is_delete)
    }

    pub fn blog_title(&self, blog_id: i32) -> Option<String> {
        self.state
            .lock()
            .unwrap()
            .blogs
            .get(&blog_id)
            .map(|row| row.title.clone())
    }

    async fn author(&self, user_id: UserId) -> AuthorSummary {
        match self.profiles.find_profile(user_id).await {
            Ok(Some(profile)) => profile.into(),
            _ => sample_profile(user_id.value(), &format!("user{user_id}")).into(),
        }
    }

    async fn blog_view(&self, row: BlogRow) -> BlogView {
        BlogView {
            id: row.id,
            author: self.author(row.author).await,
            title: row.title,
            content: row.content,
            like_value: row.like_value,
            create_time: row.create_time,
            last_update_time: row.last_update_time,
        }
    }

    async fn comment_view(&self, row: CommentRow) -> CommentView {
        CommentView {
            id: row.id,
            blog_id: row.blog_id,
            author: self.author(row.author).await,
            content: row.content,
            like_value: row.like_value,
            create_time: row.create_time,
        }
    }

    fn check(&self) -> Result<(), String> {
        if self.state.lock().unwrap().failing {
            return Err("db down".to_string());
        }
        Ok(())
    }
}

fn compare_blogs(a: &BlogRow, b: &BlogRow, field: BlogSortField) -> Ordering {
    match field {
        BlogSortField::CreateTime => a.create_time.cmp(&b.create_time),
        BlogSortField::LastUpdateTime => a.last_update_time.cmp(&b.last_update_time),
        BlogSortField::LikeValue => a.like_value.cmp(&b.like_value),
        BlogSortField::Title => a.title.cmp(&b.title),
        BlogSortField::Id => a.id.cmp(&b.id),
    }
}

fn compare_comments(a: &CommentRow, b: &CommentRow, field: CommentSortField) -> Ordering {
    match field {
        CommentSortField::CreateTime => a.create_time.cmp(&b.create_time),
        CommentSortField::LikeValue => a.like_value.cmp(&b.like_value),
        CommentSortField::Id => a.id.cmp(&b.id),
    }
}

#[async_trait]
impl BlogQuery for InMemoryBlogs {
    async fn find_blog(&self, blog_id: i32) -> Result<Option<BlogView>, BlogQueryError> {
        self.check().map_err(BlogQueryError::DatabaseError)?;
        let row = self
            .state
            .lock()
            .unwrap()
            .blogs
            .get(&blog_id)
            .filter(|row| !row.is_delete)
            .cloned();

        match row {
            Some(row) => Ok(Some(self.blog_view(row).await)),
            None => Ok(None),
        }
    }

    async fn find_comment(&self, comment_id: i32) -> Result<Option<CommentView>, BlogQueryError> {
        self.check().map_err(BlogQueryError::DatabaseError)?;
        let row = self
            .state
            .lock()
            .unwrap()
            .comments
            .get(&comment_id)
            .filter(|row| !row.is_delete)
            .cloned();

        match row {
            Some(row) => Ok(Some(self.comment_view(row).await)),
            None => Ok(None),
        }
    }

    async fn list_blogs(
        &self,
        author: Option<UserId>,
        query: ListQuery<BlogSortField>,
    ) -> Result<PageResult<BlogView>, BlogQueryError> {
        self.check().map_err(BlogQueryError::DatabaseError)?;
        let mut rows: Vec<BlogRow> = self
            .state
            .lock()
            .unwrap()
            .blogs
            .values()
            .filter(|row| !row.is_delete)
            .filter(|row| author.map_or(true, |a| row.author == a))
            .cloned()
            .collect();

        rows.sort_by(|a, b| {
            let ord = compare_blogs(a, b, query.sort);
            if query.desc {
                ord.reverse()
            } else {
                ord
            }
        });

        let page = page_of(rows, query.page);
        let mut items = Vec::with_capacity(page.items.len());
        for row in page.items.iter().cloned() {
            items.push(self.blog_view(row).await);
        }
        Ok(PageResult::new(items, query.page, page.total))
    }

    async fn list_comments(
        &self,
        blog_id: i32,
        query: ListQuery<CommentSortField>,
    ) -> Result<PageResult<CommentView>, BlogQueryError> {
        self.check().map_err(BlogQueryError::DatabaseError)?;
        let mut rows: Vec<CommentRow> = self
            .state
            .lock()
            .unwrap()
            .comments
            .values()
            .filter(|row| !row.is_delete && row.blog_id == blog_id)
            .cloned()
            .collect();

        rows.sort_by(|a, b| {
            let ord = compare_comments(a, b, query.sort);
            if query.desc {
                ord.reverse()
            } else {
                ord
            }
        });

        let page = page_of(rows, query.page);
        let mut items = Vec::with_capacity(page.items.len());
        for row in page.items.iter().cloned() {
            items.push(self.comment_view(row).await);
        }
        Ok(PageResult::new(items, query.page, page.total))
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogs {
    async fn create(&self, author: UserId, data: CreateBlogData) -> Result<i32, BlogRepositoryError> {
        self.check().map_err(BlogRepositoryError::DatabaseError)?;
        let id = self.seed_blog(author.value(), &data.title);
        if let Some(row) = self.state.lock().unwrap().blogs.get_mut(&id) {
            row.content = data.content;
        }
        Ok(id)
    }

    async fn find_record(&self, blog_id: i32) -> Result<Option<BlogRecord>, BlogRepositoryError> {
        self.check().map_err(BlogRepositoryError::DatabaseError)?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .blogs
            .get(&blog_id)
            .map(|row| BlogRecord {
                id: row.id,
                author_id: row.author,
                is_delete: row.is_delete,
            }))
    }

    async fn patch(&self, blog_id: i32, data: PatchBlogData) -> Result<(), BlogRepositoryError> {
        self.check().map_err(BlogRepositoryError::DatabaseError)?;
        let mut state = self.state.lock().unwrap();
        let row = state
            .blogs
            .get_mut(&blog_id)
            .filter(|row| !row.is_delete)
            .ok_or(BlogRepositoryError::NotFound)?;

        if let Some(title) = data.title {
            row.title = title;
        }
        if let Some(content) = data.content {
            row.content = content;
        }
        row.last_update_time = row.last_update_time + Duration::hours(1);
        Ok(())
    }

    async fn soft_delete(&self, blog_id: i32) -> Result<(), BlogRepositoryError> {
        self.check().map_err(BlogRepositoryError::DatabaseError)?;
        let mut state = self.state.lock().unwrap();
        let row = state
            .blogs
            .get_mut(&blog_id)
            .filter(|row| !row.is_delete)
            .ok_or(BlogRepositoryError::NotFound)?;
        row.is_delete = true;
        Ok(())
    }
}

#[async_trait]
impl CommentRepository for InMemoryBlogs {
    async fn create(
        &self,
        author: UserId,
        blog_id: i32,
        content: String,
    ) -> Result<i32, CommentRepositoryError> {
        self.check().map_err(CommentRepositoryError::DatabaseError)?;
        Ok(self.seed_comment(author.value(), blog_id, &content))
    }

    async fn find_record(
        &self,
        comment_id: i32,
    ) -> Result<Option<CommentRecord>, CommentRepositoryError> {
        self.check().map_err(CommentRepositoryError::DatabaseError)?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .comments
            .get(&comment_id)
            .map(|row| CommentRecord {
                id: row.id,
                author_id: row.author,
                blog_id: row.blog_id,
                is_delete: row.is_delete,
            }))
    }

    async fn soft_delete(&self, comment_id: i32) -> Result<(), CommentRepositoryError> {
        self.check().map_err(CommentRepositoryError::DatabaseError)?;
        let mut state = self.state.lock().unwrap();
        let row = state
            .comments
            .get_mut(&comment_id)
            .filter(|row| !row.is_delete)
            .ok_or(CommentRepositoryError::NotFound)?;
        row.is_delete = true;
        Ok(())
    }
}

/// The real blog services wired over one in-memory store.
pub fn blog_use_cases(blogs: InMemoryBlogs) -> BlogUseCases {
    let profiles = blogs.profiles.clone();
    BlogUseCases {
        create: Arc::new(CreateBlogService::new(blogs.clone(), blogs.clone())),
        get_single: Arc::new(GetBlogService::new(blogs.clone())),
        get_list: Arc::new(ListBlogsService::new(blogs.clone(), profiles)),
        patch: Arc::new(PatchBlogService::new(blogs.clone(), blogs.clone())),
        soft_delete: Arc::new(DeleteBlogService::new(blogs.clone())),
        create_comment: Arc::new(CreateCommentService::new(blogs.clone(), blogs.clone())),
        get_comments: Arc::new(ListCommentsService::new(blogs.clone())),
        soft_delete_comment: Arc::new(DeleteCommentService::new(blogs)),
    }
}
