use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::email::application::ports::outgoing::email_sender::EmailSender;
use crate::email::application::ports::outgoing::user_email_notifier::{
    EmailRecipient, UserEmailNotificationError, UserEmailNotifier,
};

const CONFIRMATION_SUBJECT: &str = "Confirm your account";

/// Renders user-facing mails and hands them to an [`EmailSender`].
#[derive(Clone)]
pub struct UserEmailService {
    sender: Arc<dyn EmailSender>,
    app_url: String,
}

impl fmt::Debug for UserEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserEmailService")
            .field("sender", &"<dyn EmailSender>")
            .field("app_url", &self.app_url)
            .finish()
    }
}

impl UserEmailService {
    pub fn new(sender: Arc<dyn EmailSender>, app_url: &str) -> Self {
        Self {
            sender,
            app_url: app_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn confirmation_link(&self, token: &str) -> String {
        format!("{}/confirm/{}", self.app_url, token)
    }

    fn confirmation_body(&self, username: &str, token: &str) -> String {
        let link = self.confirmation_link(token);
        format!(
            "<p>Hi {username},</p>\
             <p>Please confirm your account by opening the link below:</p>\
             <p><a href=\"{link}\">{link}</a></p>"
        )
    }
}

#[async_trait]
impl UserEmailNotifier for UserEmailService {
    async fn send_confirmation_email(
        &self,
        recipient: &EmailRecipient,
        token: &str,
    ) -> Result<(), UserEmailNotificationError> {
        let body = self.confirmation_body(&recipient.username, token);

        self.sender
            .send_email(&recipient.email, CONFIRMATION_SUBJECT, &body)
            .await
            .map_err(|e| {
                tracing::error!(recipient = %recipient.email, error = %e, "Confirmation mail failed");
                UserEmailNotificationError::EmailSendingFailed(e.to_string())
            })
    }
}
