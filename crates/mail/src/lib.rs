//! Outgoing email for the contact forms.
//!
//! [`Mailer`] is the delivery seam. Two transports implement it:
//! [`ResendMailer`] (HTTP API) and [`SmtpMailer`] (lettre). [`MailConfig::from_env`]
//! picks one from the environment; when neither is configured no mailer is
//! built and the contact endpoints report a delivery failure.

pub mod message;
pub mod resend;
pub mod smtp;

use std::sync::Arc;

pub use message::{ContactFormEmail, QuickMessageEmail};
pub use resend::ResendMailer;
pub use smtp::SmtpMailer;

/// Sender used when `MAIL_FROM` is not set.
pub const DEFAULT_FROM: &str = "Contact Form <onboarding@resend.dev>";

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    /// A sender, recipient or reply-to address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),

    /// The HTTP request to the email API failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The email API answered with a non-2xx status.
    #[error("Email provider returned HTTP {status}: {body}")]
    Provider { status: u16, body: String },
}

// ---------------------------------------------------------------------------
// OutgoingEmail / Mailer
// ---------------------------------------------------------------------------

/// A rendered message ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    /// Plain-text alternative, when the template has one.
    pub text: Option<String>,
    pub html: String,
}

/// Delivers [`OutgoingEmail`]s.
#[async_trait::async_trait]
pub trait Mailer: Send + Sync {
    /// Send one message. Returns the provider's message id when it reports one.
    async fn send(&self, email: &OutgoingEmail) -> Result<Option<String>, MailError>;
}

// ---------------------------------------------------------------------------
// MailConfig
// ---------------------------------------------------------------------------

/// Which transport to deliver through.
#[derive(Debug, Clone)]
pub enum MailTransport {
    Resend {
        api_key: String,
    },
    Smtp {
        host: String,
        port: u16,
        user: Option<String>,
        password: Option<String>,
    },
}

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub transport: MailTransport,
    /// RFC 5322 "From" mailbox, display name allowed.
    pub from: String,
}

impl MailConfig {
    /// Load configuration from environment variables.
    ///
    /// Resend wins when `RESEND_API_KEY` is set, SMTP is used when
    /// `SMTP_HOST` is set, otherwise returns `None`.
    ///
    /// | Variable         | Required | Default                                 |
    /// |------------------|----------|-----------------------------------------|
    /// | `RESEND_API_KEY` | one of   |                                         |
    /// | `SMTP_HOST`      | one of   |                                         |
    /// | `SMTP_PORT`      | no       | `587`                                   |
    /// | `SMTP_USER`      | no       |                                         |
    /// | `SMTP_PASSWORD`  | no       |                                         |
    /// | `MAIL_FROM`      | no       | `Contact Form <onboarding@resend.dev>`  |
    pub fn from_env() -> Option<Self> {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());

        let transport = if let Some(api_key) = var("RESEND_API_KEY") {
            MailTransport::Resend { api_key }
        } else {
            MailTransport::Smtp {
                host: var("SMTP_HOST")?,
                port: var("SMTP_PORT")
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(DEFAULT_SMTP_PORT),
                user: var("SMTP_USER"),
                password: var("SMTP_PASSWORD"),
            }
        };

        Some(Self {
            transport,
            from: var("MAIL_FROM").unwrap_or_else(|| DEFAULT_FROM.to_string()),
        })
    }
}

/// Build the mailer selected by `config`.
pub fn build_mailer(config: MailConfig) -> Result<Arc<dyn Mailer>, MailError> {
    let mailer: Arc<dyn Mailer> = match config.transport {
        MailTransport::Resend { api_key } => Arc::new(ResendMailer::new(api_key, config.from)?),
        MailTransport::Smtp {
            host,
            port,
            user,
            password,
        } => Arc::new(SmtpMailer::new(&host, port, user.zip(password), config.from)?),
    };
    Ok(mailer)
}
