//! Field-level validation for incoming documents.
//!
//! Error messages are surfaced verbatim to API clients, so they name fields
//! the way the JSON payload does (camelCase).

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Maximum length of a project title, in characters.
pub const PROJECT_TITLE_MAX_LEN: usize = 100;

/// Maximum length of a project's short description, in characters.
pub const PROJECT_DESCRIPTION_MAX_LEN: usize = 500;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Borrowed view over the project fields that carry validation rules.
///
/// `None` means "not provided". On create every field is expected; on
/// update only the provided ones are checked.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProjectFields<'a> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub full_description: Option<&'a str>,
    pub featured_image: Option<&'a str>,
    pub tags: Option<&'a [String]>,
}

/// Reject a missing or blank value with `"{field} is required"`.
pub fn require_non_empty(field: &str, value: Option<&str>) -> Result<(), CoreError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(CoreError::Validation(format!("{field} is required"))),
    }
}

/// Reject a value longer than `max` characters.
pub fn validate_max_len(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    if value.chars().count() > max {
        return Err(CoreError::Validation(format!(
            "{field} cannot be more than {max} characters"
        )));
    }
    Ok(())
}

/// Validate a new project. All required fields must be present and non-blank.
pub fn validate_project_create(fields: &ProjectFields<'_>) -> Result<(), CoreError> {
    require_non_empty("title", fields.title)?;
    require_non_empty("description", fields.description)?;
    require_non_empty("fullDescription", fields.full_description)?;
    require_non_empty("featuredImage", fields.featured_image)?;
    if !matches!(fields.tags, Some(t) if !t.is_empty()) {
        return Err(CoreError::Validation("tags is required".into()));
    }
    validate_project_update(fields)
}

/// Validate a partial project update. Only provided fields are checked.
pub fn validate_project_update(fields: &ProjectFields<'_>) -> Result<(), CoreError> {
    if let Some(title) = fields.title {
        require_non_empty("title", Some(title))?;
        validate_max_len("title", title, PROJECT_TITLE_MAX_LEN)?;
    }
    if let Some(description) = fields.description {
        require_non_empty("description", Some(description))?;
        validate_max_len("description", description, PROJECT_DESCRIPTION_MAX_LEN)?;
    }
    if let Some(full) = fields.full_description {
        require_non_empty("fullDescription", Some(full))?;
    }
    if let Some(image) = fields.featured_image {
        require_non_empty("featuredImage", Some(image))?;
    }
    if let Some(tags) = fields.tags {
        if tags.iter().all(|t| t.trim().is_empty()) {
            return Err(CoreError::Validation(
                "Please provide at least one tag".into(),
            ));
        }
    }
    Ok(())
}

/// A skill must have a non-blank name.
pub fn validate_skill_name(name: Option<&str>) -> Result<(), CoreError> {
    match name {
        Some(n) if !n.trim().is_empty() => Ok(()),
        _ => Err(CoreError::Validation("Skill name is required".into())),
    }
}

/// Public contact details must always carry an email address.
pub fn validate_contact_email(email: Option<&str>) -> Result<(), CoreError> {
    match email {
        Some(e) if !e.trim().is_empty() => Ok(()),
        _ => Err(CoreError::Validation("Email address is required".into())),
    }
}

/// Loose syntactic email check: `local@domain.tld`, no whitespace.
pub fn is_valid_email(addr: &str) -> bool {
    EMAIL_RE.is_match(addr)
}

/// Trim a string, returning `None` when nothing remains.
pub fn trim_to_option(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Trim every entry of a list and drop the blank ones.
pub fn clean_list(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}
