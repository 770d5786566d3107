//! Project entity model and DTOs.

use portfolio_core::error::CoreError;
use portfolio_core::types::{DbId, Timestamp};
use portfolio_core::validation::{
    clean_list, trim_to_option, validate_project_create, validate_project_update, ProjectFields,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub full_description: String,
    pub featured_image: String,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub link: Option<String>,
    pub github_link: Option<String>,
    pub featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
///
/// Missing fields deserialize to empty values so validation can report them
/// by name. Unknown fields (including the retired `image`) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateProject {
    pub title: String,
    pub description: String,
    pub full_description: String,
    pub featured_image: String,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub link: Option<String>,
    pub github_link: Option<String>,
    pub featured: bool,
}

impl CreateProject {
    /// Trim text fields and drop blank list entries.
    pub fn normalized(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            full_description: self.full_description.trim().to_string(),
            featured_image: self.featured_image.trim().to_string(),
            images: clean_list(self.images),
            tags: clean_list(self.tags),
            link: trim_to_option(self.link),
            github_link: trim_to_option(self.github_link),
            featured: self.featured,
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        validate_project_create(&ProjectFields {
            title: Some(&self.title),
            description: Some(&self.description),
            full_description: Some(&self.full_description),
            featured_image: Some(&self.featured_image),
            tags: Some(&self.tags),
        })
    }
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub full_description: Option<String>,
    pub featured_image: Option<String>,
    pub images: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub link: Option<String>,
    pub github_link: Option<String>,
    pub featured: Option<bool>,
}

impl UpdateProject {
    /// Trim text fields and drop blank list entries. A blank `link` or
    /// `github_link` stays `Some("")`, which the update stores as `NULL`.
    pub fn normalized(self) -> Self {
        let trim = |v: Option<String>| v.map(|s| s.trim().to_string());
        Self {
            title: trim(self.title),
            description: trim(self.description),
            full_description: trim(self.full_description),
            featured_image: trim(self.featured_image),
            images: self.images.map(clean_list),
            tags: self.tags.map(clean_list),
            link: trim(self.link),
            github_link: trim(self.github_link),
            featured: self.featured,
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        validate_project_update(&ProjectFields {
            title: self.title.as_deref(),
            description: self.description.as_deref(),
            full_description: self.full_description.as_deref(),
            featured_image: self.featured_image.as_deref(),
            tags: self.tags.as_deref(),
        })
    }
}

/// One row touched by the legacy `image` -> `featured_image` migration.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyImageMigration {
    pub id: DbId,
    pub title: String,
    pub updated: bool,
}

/// Request body for rewriting stored image URLs to a new public host.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RewriteImageUrls {
    pub from_prefix: String,
    pub to_prefix: String,
}
