use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::auth::application::ports::outgoing::token_generator::TokenGenerator;
use crate::config::TOKEN_LENGTH;

/// Draws tokens from the thread-local CSPRNG over `[A-Za-z0-9]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomTokenGenerator;

impl RandomTokenGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl TokenGenerator for RandomTokenGenerator {
    fn generate(&self) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LENGTH)
            .map(char::from)
            .collect()
    }
}
