// src/shared/pagination.rs
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_COUNT: u64 = 10;
pub const MAX_COUNT: u64 = 100;
/// Postgres binds `OFFSET` as a bigint.
pub const MAX_OFFSET: u64 = i64::MAX as u64;

//
// ──────────────────────────────────────────────────────────
// Sort fields
// ──────────────────────────────────────────────────────────
//

/// A listable column, addressed by its public name through a static table.
pub trait SortField: Sized + Copy + Default + 'static {
    const FIELDS: &'static [(&'static str, Self)];

    fn parse(name: &str) -> Option<Self> {
        Self::FIELDS
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| *value)
    }
}

//
// ──────────────────────────────────────────────────────────
// Raw query string
// ──────────────────────────────────────────────────────────
//

/// `?page=&count=&sort=&desc=` exactly as the client sent it.
#[derive(Debug, Clone, Default, Deserialize, utoipa::IntoParams)]
pub struct ListParams {
    pub page: Option<u64>,
    pub count: Option<u64>,
    pub sort: Option<String>,
    /// `0`, `1`, `true` or `false`
    pub desc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListParamsError {
    #[error("page must be at least 1 and within range")]
    InvalidPage,

    #[error("count must be between 1 and {MAX_COUNT}")]
    InvalidCount,

    #[error("unknown sort field: {0}")]
    UnknownSortField(String),

    #[error("desc must be one of 0, 1, true, false")]
    InvalidDesc(String),
}

impl ListParamsError {
    pub fn field(&self) -> &'static str {
        match self {
            ListParamsError::InvalidPage => "page",
            ListParamsError::InvalidCount => "count",
            ListParamsError::UnknownSortField(_) => "sort",
            ListParamsError::InvalidDesc(_) => "desc",
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Validated request
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub count: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            count: DEFAULT_COUNT,
        }
    }
}

impl PageRequest {
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.count)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListQuery<S: SortField> {
    pub page: PageRequest,
    pub sort: S,
    pub desc: bool,
}

impl ListParams {
    pub fn into_query<S: SortField>(self) -> Result<ListQuery<S>, ListParamsError> {
        let count = self.count.unwrap_or(DEFAULT_COUNT);
        if count == 0 || count > MAX_COUNT {
            return Err(ListParamsError::InvalidCount);
        }

        let page = self.page.unwrap_or(DEFAULT_PAGE);
        let offset = page
            .checked_sub(1)
            .and_then(|skipped| skipped.checked_mul(count));
        if !matches!(offset, Some(offset) if offset <= MAX_OFFSET) {
            return Err(ListParamsError::InvalidPage);
        }

        let sort = match self.sort.as_deref().map(str::trim) {
            None | Some("") => S::default(),
            Some(name) => {
                S::parse(name).ok_or_else(|| ListParamsError::UnknownSortField(name.to_string()))?
            }
        };

        let desc = match self.desc.as_deref().map(str::trim) {
            None | Some("") => false,
            Some(raw) => parse_flag(raw).ok_or_else(|| ListParamsError::InvalidDesc(raw.to_string()))?,
        };

        Ok(ListQuery {
            page: PageRequest { page, count },
            sort,
            desc,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}

//
// ──────────────────────────────────────────────────────────
// Result page
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub count: u64,
    pub total: u64,
}

impl<T> PageResult<T> {
    pub fn new(items: Vec<T>, page: PageRequest, total: u64) -> Self {
        Self {
            items,
            page: page.page,
            count: page.count,
            total,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResult<U> {
        PageResult {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            count: self.count,
            total: self.total,
        }
    }
}
