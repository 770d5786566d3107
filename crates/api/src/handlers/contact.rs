//! Handlers for contact details and the two visitor email forms.

use axum::extract::State;
use axum::Json;
use portfolio_core::validation::is_valid_email;
use portfolio_db::models::contact::{Contact, UpdateContact};
use portfolio_db::repositories::ContactRepo;
use portfolio_mail::{ContactFormEmail, QuickMessageEmail};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppJson, AppResult};
use crate::middleware::auth::AdminSession;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Contact details
// ---------------------------------------------------------------------------

/// GET /api/contact
pub async fn get(State(state): State<AppState>) -> AppResult<Json<Contact>> {
    let contact = ContactRepo::get_or_create(&state.pool).await?;
    Ok(Json(contact))
}

/// PUT /api/contact
pub async fn update(
    _session: AdminSession,
    State(state): State<AppState>,
    AppJson(input): AppJson<UpdateContact>,
) -> AppResult<Json<Contact>> {
    let input = input.normalized();
    input.validate()?;
    let contact = ContactRepo::upsert(&state.pool, &input).await?;
    Ok(Json(contact))
}

// ---------------------------------------------------------------------------
// Contact form
// ---------------------------------------------------------------------------

/// Body of `POST /api/contact`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactFormRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFormRequest {
    fn is_complete(&self) -> bool {
        [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.subject,
            &self.message,
        ]
        .iter()
        .all(|f| !f.trim().is_empty())
    }
}

#[derive(Debug, Serialize)]
pub struct ContactFormResponse {
    pub message: &'static str,
    /// Provider message id, when the transport reports one.
    pub id: Option<String>,
}

/// POST /api/contact
///
/// Email a contact-form submission to the site owner.
pub async fn submit(
    State(state): State<AppState>,
    AppJson(input): AppJson<ContactFormRequest>,
) -> AppResult<Json<ContactFormResponse>> {
    if !input.is_complete() {
        return Err(AppError::BadRequest("All fields are required".into()));
    }

    let email = ContactFormEmail {
        first_name: input.first_name.trim(),
        last_name: input.last_name.trim(),
        email: input.email.trim(),
        subject: input.subject.trim(),
        message: &input.message,
    }
    .render(&state.config.contact_email);

    let id = state.mailer()?.send(&email).await?;
    tracing::info!(id = ?id, "Contact form delivered");
    Ok(Json(ContactFormResponse {
        message: "Email sent successfully",
        id,
    }))
}

// ---------------------------------------------------------------------------
// Quick message
// ---------------------------------------------------------------------------

/// Body of `POST /api/send-email`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct QuickMessageRequest {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct QuickMessageResponse {
    pub success: bool,
    pub message: &'static str,
}

/// POST /api/send-email
pub async fn send_quick_message(
    State(state): State<AppState>,
    AppJson(input): AppJson<QuickMessageRequest>,
) -> AppResult<Json<QuickMessageResponse>> {
    let name = input.name.trim();
    let address = input.email.trim();
    if name.is_empty() || address.is_empty() || input.message.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Name, email and message are required".into(),
        ));
    }
    if !is_valid_email(address) {
        return Err(AppError::BadRequest("Invalid email format".into()));
    }

    let email = QuickMessageEmail {
        name,
        email: address,
        subject: input.subject.as_deref().map(str::trim).filter(|s| !s.is_empty()),
        message: &input.message,
    }
    .render(&state.config.contact_email);

    state.mailer()?.send(&email).await?;
    Ok(Json(QuickMessageResponse {
        success: true,
        message: "Email sent successfully",
    }))
}
