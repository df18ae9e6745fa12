use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::blog::application::ports::incoming::use_cases::{
    ListBlogsError, ListBlogsUseCase,
};
use crate::modules::blog::application::ports::outgoing::{BlogQuery, BlogSortField, BlogView};
use crate::modules::user::application::ports::outgoing::ProfileQuery;
use crate::shared::pagination::{ListParams, PageResult};

pub struct ListBlogsService<Q, P>
where
    Q: BlogQuery,
    P: ProfileQuery,
{
    query: Q,
    profiles: P,
}

impl<Q, P> ListBlogsService<Q, P>
where
    Q: BlogQuery,
    P: ProfileQuery,
{
    pub fn new(query: Q, profiles: P) -> Self {
        Self { query, profiles }
    }
}

#[async_trait]
impl<Q, P> ListBlogsUseCase for ListBlogsService<Q, P>
where
    Q: BlogQuery + Send + Sync,
    P: ProfileQuery + Send + Sync,
{
    async fn execute(
        &self,
        author: Option<UserId>,
        params: ListParams,
    ) -> Result<PageResult<BlogView>, ListBlogsError> {
        let query = params.into_query::<BlogSortField>()?;

        if let Some(author) = author {
            self.profiles
                .find_profile(author)
                .await
                .map_err(|e| ListBlogsError::QueryError(e.to_string()))?
                .ok_or(ListBlogsError::AuthorNotFound)?;
        }

        self.query
            .list_blogs(author, query)
            .await
            .map_err(|e| ListBlogsError::QueryError(e.to_string()))
    }
}
