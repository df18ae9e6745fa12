pub const MAX_TITLE_LEN: usize = 125;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title must be at most {MAX_TITLE_LEN} characters")]
    TitleTooLong,

    #[error("Content cannot be empty")]
    EmptyContent,
}

impl ContentError {
    pub fn field(&self) -> &'static str {
        match self {
            ContentError::EmptyTitle | ContentError::TitleTooLong => "title",
            ContentError::EmptyContent => "content",
        }
    }
}

pub fn validate_title(raw: &str) -> Result<String, ContentError> {
    let title = raw.trim();

    if title.is_empty() {
        return Err(ContentError::EmptyTitle);
    }

    if title.chars().count() > MAX_TITLE_LEN {
        return Err(ContentError::TitleTooLong);
    }

    Ok(title.to_string())
}

/// Blog bodies and comments keep their whitespace; only blank input is refused.
pub fn validate_content(raw: &str) -> Result<String, ContentError> {
    if raw.trim().is_empty() {
        return Err(ContentError::EmptyContent);
    }

    Ok(raw.to_string())
}
