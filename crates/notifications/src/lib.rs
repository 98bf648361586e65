//! Outbound notifications.
//!
//! - [`NotificationSender`] -- single-attempt delivery of a plain-text email.
//! - [`SmtpSender`] -- the SMTP implementation backed by `lettre`.
//! - [`EmailConfig`] -- explicit transport configuration.
//!
//! Delivery is best effort: one attempt, no retry, no queue. Failures are
//! returned to the caller.

pub mod email;
pub mod sender;

pub use email::{EmailConfig, EmailConfigError, SmtpSender};
pub use sender::{DeliveryError, DeliveryReceipt, EmailMessage, NotificationSender};
