//! Skill entity model and DTOs.

use portfolio_core::error::CoreError;
use portfolio_core::types::{DbId, Timestamp};
use portfolio_core::validation::{trim_to_option, validate_skill_name};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A skill row from the `skills` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or replacing a skill.
///
/// `category` falls back to `"Uncategorized"` when omitted or blank.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillInput {
    pub name: Option<String>,
    pub category: Option<String>,
}

impl SkillInput {
    pub fn normalized(self) -> Self {
        Self {
            name: trim_to_option(self.name),
            category: trim_to_option(self.category),
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        validate_skill_name(self.name.as_deref())
    }
}
