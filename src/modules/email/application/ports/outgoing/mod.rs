pub mod email_sender;
pub mod user_email_notifier;

pub use email_sender::{EmailSendError, EmailSender};
pub use user_email_notifier::{EmailRecipient, UserEmailNotificationError, UserEmailNotifier};
