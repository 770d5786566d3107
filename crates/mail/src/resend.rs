//! Delivery through the Resend HTTP API.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{MailError, Mailer, OutgoingEmail};

const RESEND_API_URL: &str = "https://api.resend.com/emails";

/// HTTP request timeout for a single send.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Request body for `POST /emails`.
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct SendResponse {
    id: Option<String>,
}

impl<'a> SendRequest<'a> {
    fn new(from: &'a str, email: &'a OutgoingEmail) -> Self {
        Self {
            from,
            to: [email.to.as_str()],
            subject: &email.subject,
            html: &email.html,
            text: email.text.as_deref(),
            reply_to: email.reply_to.as_deref(),
        }
    }
}

/// Sends email with a Resend API key.
pub struct ResendMailer {
    client: reqwest::Client,
    api_key: String,
    from: String,
    endpoint: String,
}

impl ResendMailer {
    pub fn new(api_key: String, from: String) -> Result<Self, MailError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_key,
            from,
            endpoint: RESEND_API_URL.to_string(),
        })
    }

    /// Point the mailer at a different API URL (e.g. a local mock).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait::async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<Option<String>, MailError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&SendRequest::new(&self.from, email))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), body = %body, "Resend rejected email");
            return Err(MailError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let sent: SendResponse = response.json().await?;
        tracing::info!(to = %email.to, id = ?sent.id, "Email sent via Resend");
        Ok(sent.id)
    }
}
