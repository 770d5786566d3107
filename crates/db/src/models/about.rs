//! About page (singleton) model and DTOs.
//!
//! Nested sections are stored as JSONB and exposed through the shared
//! content types in `portfolio_core::content`.

use portfolio_core::content::{
    default_bio, default_certifications, default_contact_info, default_education,
    default_experiences, default_skill_groups, Certification, ContactInfo, Education, Experience,
    SkillGroup, DEFAULT_ABOUT_SUBTITLE, DEFAULT_ABOUT_TITLE, DEFAULT_PROFILE_IMAGE,
};
use portfolio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// The single row of the `about` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub id: DbId,
    pub title: String,
    pub subtitle: String,
    pub profile_image: String,
    pub bio: Vec<String>,
    pub skills: Json<Vec<SkillGroup>>,
    pub experiences: Json<Vec<Experience>>,
    pub education: Json<Vec<Education>>,
    pub contact_info: Option<Json<ContactInfo>>,
    pub certifications: Option<Json<Vec<Certification>>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A fully specified About document, used for inserts.
#[derive(Debug, Clone, PartialEq)]
pub struct AboutDocument {
    pub title: String,
    pub subtitle: String,
    pub profile_image: String,
    pub bio: Vec<String>,
    pub skills: Vec<SkillGroup>,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub contact_info: Option<ContactInfo>,
    pub certifications: Option<Vec<Certification>>,
}

impl Default for AboutDocument {
    fn default() -> Self {
        Self {
            title: DEFAULT_ABOUT_TITLE.to_string(),
            subtitle: DEFAULT_ABOUT_SUBTITLE.to_string(),
            profile_image: DEFAULT_PROFILE_IMAGE.to_string(),
            bio: default_bio(),
            skills: default_skill_groups(),
            experiences: default_experiences(),
            education: default_education(),
            contact_info: Some(default_contact_info()),
            certifications: Some(default_certifications()),
        }
    }
}

/// DTO for `PUT /about`. Only provided sections are replaced.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAbout {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub profile_image: Option<String>,
    pub bio: Option<Vec<String>>,
    pub skills: Option<Vec<SkillGroup>>,
    pub experiences: Option<Vec<Experience>>,
    pub education: Option<Vec<Education>>,
    pub contact_info: Option<ContactInfo>,
    pub certifications: Option<Vec<Certification>>,
}

impl UpdateAbout {
    /// Overlay the provided sections onto the default document.
    pub fn into_document(self) -> AboutDocument {
        let base = AboutDocument::default();
        AboutDocument {
            title: self.title.unwrap_or(base.title),
            subtitle: self.subtitle.unwrap_or(base.subtitle),
            profile_image: self.profile_image.unwrap_or(base.profile_image),
            bio: self.bio.unwrap_or(base.bio),
            skills: self.skills.unwrap_or(base.skills),
            experiences: self.experiences.unwrap_or(base.experiences),
            education: self.education.unwrap_or(base.education),
            contact_info: self.contact_info.or(base.contact_info),
            certifications: self.certifications.or(base.certifications),
        }
    }
}
