use email_address::EmailAddress;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MAX_USERNAME_LEN: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password cannot be empty")]
    EmptyPassword,

    #[error("Password must be at least {MIN_PASSWORD_LEN} characters")]
    PasswordTooShort,

    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Username must be at most {MAX_USERNAME_LEN} characters")]
    UsernameTooLong,
}

impl CredentialError {
    /// Request field the error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            CredentialError::EmptyEmail | CredentialError::InvalidEmailFormat => "email",
            CredentialError::EmptyPassword | CredentialError::PasswordTooShort => "password",
            CredentialError::EmptyUsername | CredentialError::UsernameTooLong => "username",
        }
    }
}

/// Trimmed, lowercased, syntactically valid email.
pub fn normalize_email(raw: &str) -> Result<String, CredentialError> {
    let email = raw.trim();

    if email.is_empty() {
        return Err(CredentialError::EmptyEmail);
    }

    if !EmailAddress::is_valid(email) {
        return Err(CredentialError::InvalidEmailFormat);
    }

    Ok(email.to_lowercase())
}

/// Passwords are taken verbatim; only emptiness and length are checked.
pub fn validate_new_password(raw: &str) -> Result<String, CredentialError> {
    if raw.trim().is_empty() {
        return Err(CredentialError::EmptyPassword);
    }

    if raw.chars().count() < MIN_PASSWORD_LEN {
        return Err(CredentialError::PasswordTooShort);
    }

    Ok(raw.to_string())
}

pub fn validate_username(raw: &str) -> Result<String, CredentialError> {
    let username = raw.trim();

    if username.is_empty() {
        return Err(CredentialError::EmptyUsername);
    }

    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(CredentialError::UsernameTooLong);
    }

    Ok(username.to_string())
}
