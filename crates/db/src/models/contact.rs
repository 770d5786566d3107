//! Public contact details (singleton) model and DTOs.

use portfolio_core::error::CoreError;
use portfolio_core::types::{DbId, Timestamp};
use portfolio_core::validation::validate_contact_email;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The single row of the `contact_info` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: DbId,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for `PUT /contact`. `email` is mandatory, the rest are patched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateContact {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

impl UpdateContact {
    pub fn normalized(self) -> Self {
        let trim = |v: Option<String>| v.map(|s| s.trim().to_string());
        Self {
            email: trim(self.email),
            phone: trim(self.phone),
            location: trim(self.location),
            linkedin: trim(self.linkedin),
            github: trim(self.github),
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        validate_contact_email(self.email.as_deref())
    }
}
