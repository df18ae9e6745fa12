use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailSendError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Message could not be built: {0}")]
    BuildFailed(String),

    #[error("Transport error: {0}")]
    TransportFailed(String),
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    /// `body` is sent as `text/html`.
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), EmailSendError>;
}
