use std::fmt;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config::TOKEN_LENGTH;

// ========================= UserId =========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl From<i32> for UserId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<UserId> for i32 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ========================= Tokens =========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenPurpose {
    /// Bearer token for authenticated requests
    Session,
    /// One-shot email confirmation token
    Confirm,
}

impl TokenPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenPurpose::Session => "session",
            TokenPurpose::Confirm => "confirm",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "session" => Some(TokenPurpose::Session),
            "confirm" => Some(TokenPurpose::Confirm),
            _ => None,
        }
    }
}

/// What the token cache holds for one opaque token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRecord {
    pub key: String,
    pub user_id: UserId,
    pub purpose: TokenPurpose,
}

impl TokenRecord {
    pub fn session(key: String, user_id: UserId) -> Self {
        Self {
            key,
            user_id,
            purpose: TokenPurpose::Session,
        }
    }

    pub fn confirmation(key: String, user_id: UserId) -> Self {
        Self {
            key,
            user_id,
            purpose: TokenPurpose::Confirm,
        }
    }
}

static TOKEN_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^[A-Za-z0-9]{{{TOKEN_LENGTH}}}$")).expect("token pattern is valid")
});

/// Exactly `TOKEN_LENGTH` ASCII alphanumerics.
pub fn is_well_formed_token(raw: &str) -> bool {
    TOKEN_SHAPE.is_match(raw)
}

/// Short, non-reversible tag for a token, safe to put in logs.
pub fn token_fingerprint(token: &str) -> String {
    let digest = Sha256::digest(token.as_bytes());
    digest[..6].iter().map(|b| format!("{b:02x}")).collect()
}

// ========================= Users =========================

/// The user behind a resolved session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub id: UserId,
    pub email: String,
    pub username: String,
    pub active: bool,
    pub last_login_time: Option<DateTime<Utc>>,
}
