//! Email notification delivery via SMTP.
//!
//! [`SmtpSender`] wraps the `lettre` async SMTP transport to send plain-text
//! emails. It is constructed from an explicit [`EmailConfig`]; the binary
//! fills one from the environment via [`EmailConfig::from_env`], which
//! returns `Ok(None)` when `SMTP_HOST` is unset so no mailer gets built.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use uuid::Uuid;

use crate::sender::{DeliveryError, DeliveryReceipt, EmailMessage, NotificationSender};

// ---------------------------------------------------------------------------
// EmailConfig
// ---------------------------------------------------------------------------

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address when `SMTP_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "noreply@lms.local";

/// Error raised when the SMTP environment holds an unusable value.
#[derive(Debug, thiserror::Error)]
pub enum EmailConfigError {
    #[error("SMTP_PORT has an invalid value: {0}")]
    InvalidPort(String),
}

/// Configuration for the SMTP transport.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// SMTP server hostname.
    pub host: String,
    /// SMTP server port (defaults to 587).
    pub port: u16,
    /// Optional SMTP username.
    pub username: Option<String>,
    /// Optional SMTP password.
    pub password: Option<String>,
    /// RFC 5322 "From" address.
    pub from_address: String,
}

impl EmailConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `Ok(None)` if `SMTP_HOST` is not set, signalling that email
    /// delivery is not configured and should be skipped. An unparsable
    /// `SMTP_PORT` is an error rather than a silent fallback.
    ///
    /// | Variable        | Required | Default              |
    /// |-----------------|----------|----------------------|
    /// | `SMTP_HOST`     | yes      | --                   |
    /// | `SMTP_PORT`     | no       | `587`                |
    /// | `SMTP_FROM`     | no       | `noreply@lms.local`  |
    /// | `SMTP_USER`     | no       | --                   |
    /// | `SMTP_PASSWORD` | no       | --                   |
    pub fn from_env() -> Result<Option<Self>, EmailConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    fn from_lookup<F>(lookup: F) -> Result<Option<Self>, EmailConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let Some(host) = lookup("SMTP_HOST") else {
            return Ok(None);
        };

        let port = match lookup("SMTP_PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| EmailConfigError::InvalidPort(raw))?,
            None => DEFAULT_SMTP_PORT,
        };

        Ok(Some(Self {
            host,
            port,
            username: lookup("SMTP_USER"),
            password: lookup("SMTP_PASSWORD"),
            from_address: lookup("SMTP_FROM").unwrap_or_else(|| DEFAULT_FROM_ADDRESS.to_string()),
        }))
    }

    /// Domain part of the sender address, used for generated message ids.
    fn sender_domain(&self) -> &str {
        self.from_address
            .rsplit_once('@')
            .map(|(_, domain)| domain.trim_end_matches('>'))
            .filter(|domain| !domain.is_empty())
            .unwrap_or("localhost")
    }
}

// ---------------------------------------------------------------------------
// Message assembly
// ---------------------------------------------------------------------------

/// Assemble the MIME message and the `Message-ID` it carries.
fn build_message(
    config: &EmailConfig,
    message: &EmailMessage,
) -> Result<(Message, String), DeliveryError> {
    let message_id = format!("<{}@{}>", Uuid::new_v4(), config.sender_domain());

    let email = Message::builder()
        .from(config.from_address.parse()?)
        .to(message.to.parse()?)
        .subject(message.subject.as_str())
        .message_id(Some(message_id.clone()))
        .header(ContentType::TEXT_PLAIN)
        .body(message.body.clone())
        .map_err(|e| DeliveryError::Build(e.to_string()))?;

    Ok((email, message_id))
}

// ---------------------------------------------------------------------------
// SmtpSender
// ---------------------------------------------------------------------------

/// Sends emails over a STARTTLS SMTP relay.
pub struct SmtpSender {
    config: EmailConfig,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpSender {
    /// Build the transport from the given configuration.
    ///
    /// No connection is opened until the first send.
    pub fn new(config: EmailConfig) -> Result<Self, DeliveryError> {
        let mut builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?.port(config.port);

        if let (Some(user), Some(pass)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(Self {
            transport: builder.build(),
            config,
        })
    }
}

#[async_trait]
impl NotificationSender for SmtpSender {
    async fn send(&self, message: &EmailMessage) -> Result<DeliveryReceipt, DeliveryError> {
        let (email, message_id) = build_message(&self.config, message)?;

        let response = self.transport.send(email).await?;
        if !response.is_positive() {
            return Err(DeliveryError::Rejected(response.code().to_string()));
        }

        tracing::info!(to = %message.to, message_id = %message_id, "Notification email sent");
        Ok(DeliveryReceipt { message_id })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
